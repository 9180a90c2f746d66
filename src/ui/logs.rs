//! Log viewer popup using tui-logger

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::theme::Theme;
use crate::ui::centered_rect;

/// Render the recent log records
pub fn render_logs(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(85, 75, frame.area());

    frame.render_widget(Clear, area);

    // Move events from hot buffer to widget buffer
    tui_logger::move_events();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .border_type(BorderType::Rounded)
        .title(" Logs (l/Esc: close) ")
        .title_style(theme.title());

    let logger_widget = TuiLoggerWidget::default()
        .style_error(theme.error())
        .style_warn(theme.warning())
        .style_info(theme.info())
        .style_debug(theme.text_muted())
        .style_trace(theme.text_muted())
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .block(block);

    frame.render_widget(logger_widget, area);
}
