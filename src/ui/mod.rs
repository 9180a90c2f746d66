//! UI rendering module
//!
//! Contains all view rendering logic for the TUI.

mod dialog;
mod header;
mod help;
mod logs;
mod panel;
mod wheel;

pub use dialog::render_result_dialog;
pub use header::render_header;
pub use help::render_help;
pub use logs::render_logs;
pub use panel::{render_prize_panel, PanelInfo};
pub use wheel::WheelWidget;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Theme;

/// Create a centered rect for popups
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render an error popup
pub fn render_error_popup(frame: &mut Frame, theme: &Theme, message: &str) {
    let area = centered_rect(60, 20, frame.area());

    let block = Block::default()
        .title(" Error ")
        .title_style(theme.error())
        .borders(Borders::ALL)
        .border_style(theme.error());

    let paragraph = Paragraph::new(message)
        .style(theme.text())
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Split the screen into header, wheel stage, side panel and footer
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Stage
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(30)])
        .split(rows[1]);

    (rows[0], columns[0], columns[1], rows[2])
}

/// Render the status bar / footer
pub fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect, hint: &str) {
    let footer = Paragraph::new(hint)
        .style(theme.key_desc())
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
