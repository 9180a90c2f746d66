//! Header rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::theme::Theme;
use crate::wheel::Variant;

/// Render the title bar with the variant tabs and spin status
pub fn render_header(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    active: Variant,
    status: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(area);

    let titles: Vec<Line> = Variant::all()
        .iter()
        .map(|v| {
            let style = if *v == active {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::from(Span::styled(v.title(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(format!(" Fortune Wheel v{} ", crate::VERSION))
                .title_style(theme.title()),
        )
        .select(active.index())
        .style(theme.text())
        .highlight_style(theme.tab_active())
        .divider(Span::styled(" │ ", theme.text_muted()));

    frame.render_widget(tabs, chunks[0]);

    let (text, style) = match status {
        Some(spinning) => (format!(" {} ", spinning), theme.warning()),
        None => (" Ready ".to_string(), theme.success()),
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(" Status ")
        .title_style(theme.subtitle());

    let status_para = Paragraph::new(text)
        .style(style)
        .block(status_block)
        .alignment(Alignment::Center);

    frame.render_widget(status_para, chunks[1]);
}
