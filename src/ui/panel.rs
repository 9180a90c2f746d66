//! Prize legend and spin summary

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::theme::{symbols, Theme};
use crate::wheel::{Segment, Segments};

/// What the side panel reports besides the legend
pub struct PanelInfo<'a> {
    /// Segment currently passing the pointer
    pub under_pointer: &'a Segment,
    pub last_result: Option<&'a Segment>,
    pub spins_completed: u64,
    pub spinning: bool,
}

/// Render the prize legend with the latest winner marked
pub fn render_prize_panel(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    segments: &Segments,
    info: PanelInfo<'_>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(6)])
        .split(area);

    let winner_id = info.last_result.map(|s| s.id);

    let items: Vec<ListItem> = segments
        .iter()
        .map(|segment| {
            let is_winner = !info.spinning && winner_id == Some(segment.id);
            let marker = if is_winner {
                format!(" {}", symbols::CHECK)
            } else {
                String::new()
            };

            ListItem::new(Line::from(vec![
                Span::styled(symbols::SWATCH, theme.prize(segment.color)),
                Span::raw(" "),
                Span::styled(
                    segment.label.as_str(),
                    if is_winner {
                        theme.selected()
                    } else {
                        theme.text()
                    },
                ),
                Span::styled(marker, theme.success()),
            ]))
        })
        .collect();

    let legend = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Prizes ")
            .title_style(theme.title()),
    );
    frame.render_widget(legend, chunks[0]);

    let last = match info.last_result {
        Some(segment) => Span::styled(segment.label.as_str(), theme.prize(segment.color)),
        None => Span::styled("none yet", theme.text_muted()),
    };

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Spins: ", theme.text_secondary()),
            Span::styled(info.spins_completed.to_string(), theme.text()),
        ]),
        Line::from(vec![Span::styled("Last:  ", theme.text_secondary()), last]),
        Line::from(vec![
            Span::styled("Now:   ", theme.text_secondary()),
            Span::styled(
                info.under_pointer.label.as_str(),
                theme.prize(info.under_pointer.color),
            ),
        ]),
        Line::from(Span::styled(
            if info.spinning {
                "Wheel is turning..."
            } else {
                "Press Space to spin"
            },
            theme.text_muted(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Results ")
            .title_style(theme.title()),
    );
    frame.render_widget(summary, chunks[1]);
}
