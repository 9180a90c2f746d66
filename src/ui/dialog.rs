//! Result dialog

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::theme::{symbols, Theme};
use crate::ui::centered_rect;
use crate::wheel::Segment;

/// Render the "you won" dialog for `prize`
pub fn render_result_dialog(frame: &mut Frame, theme: &Theme, prize: &Segment) {
    let area = centered_rect(50, 40, frame.area());

    frame.render_widget(Clear, area);

    let title = format!(" {0} Congratulations! {0} ", symbols::PARTY);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(theme.border_focused())
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(theme.title());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("You Won:", theme.text_secondary())),
        Line::from(""),
        Line::from(Span::styled(prize.label.as_str(), theme.prize(prize.color))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", theme.key_hint()),
            Span::styled(" Claim Prize", theme.key_desc()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{Segment, SegmentColor};
    use ratatui::backend::TestBackend;

    #[test]
    fn shows_the_prize_label() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let prize = Segment::new(5, "Bonus Round", SegmentColor::rgb(255, 0, 255));

        terminal
            .draw(|frame| render_result_dialog(frame, &Theme::new(), &prize))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Bonus Round"));
        assert!(text.contains("Claim Prize"));
    }
}
