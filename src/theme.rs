//! Theme and styling
//!
//! A game-show palette: gold trim and marquee lights on a near-black stage.

use ratatui::style::{Color, Modifier, Style};

use crate::wheel::SegmentColor;

/// Stage colors
pub mod palette {
    use ratatui::style::Color;

    /// Trim gold - #FFD700
    pub const GOLD: Color = Color::Rgb(255, 215, 0);

    /// Dimmed gold for unlit bulbs and the rim
    pub const BRASS: Color = Color::Rgb(140, 110, 30);

    /// Hub fill - #1A1A1A
    pub const HUB: Color = Color::Rgb(26, 26, 26);

    /// Spotlight white
    pub const SPOTLIGHT: Color = Color::Rgb(255, 248, 225);
}

/// Application theme
pub struct Theme {
    // Accent
    pub primary: Color,

    // Stage
    pub bg_light: Color,
    pub hub: Color,
    pub rim: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: palette::GOLD,

            bg_light: Color::Rgb(44, 36, 48),
            hub: palette::HUB,
            rim: palette::BRASS,

            text_primary: palette::SPOTLIGHT,
            text_secondary: Color::Rgb(200, 190, 170),
            text_muted: Color::Rgb(130, 120, 110),

            success: Color::Rgb(102, 187, 106),
            warning: palette::GOLD,
            error: Color::Rgb(239, 83, 80),
            info: Color::Rgb(79, 195, 247),

            border: Color::Rgb(70, 60, 50),
            border_focused: palette::GOLD,
        }
    }
}

impl Theme {
    /// Create a new theme
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    // Style builders
    // ─────────────────────────────────────────────────────────────

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Subtitle style
    pub fn subtitle(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    /// Block border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Block border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Highlighted row
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.bg_light)
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Success status
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Warning status
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Error status
    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Info status
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key description style
    pub fn key_desc(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Centre hub
    pub fn hub(&self) -> Style {
        Style::default().bg(self.hub).fg(self.primary)
    }

    /// Outer rim between the bulbs
    pub fn rim(&self) -> Style {
        Style::default().fg(self.rim)
    }

    /// A marquee bulb, lit or dark
    pub fn bulb(&self, lit: bool) -> Style {
        if lit {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.rim)
        }
    }

    /// Fill for a wedge of the given segment color
    pub fn wedge(&self, color: SegmentColor) -> Style {
        Style::default().bg(segment_color(color))
    }

    /// Readable label text on top of a wedge
    pub fn wedge_label(&self, color: SegmentColor) -> Style {
        let fg = if color.luminance() > 0.5 {
            Color::Black
        } else {
            Color::White
        };
        Style::default()
            .bg(segment_color(color))
            .fg(fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Prize text drawn in its own segment color
    pub fn prize(&self, color: SegmentColor) -> Style {
        Style::default()
            .fg(segment_color(color))
            .add_modifier(Modifier::BOLD)
    }
}

/// Convert a segment color for the terminal
pub fn segment_color(color: SegmentColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Glyphs used across the UI
pub mod symbols {
    pub const CHECK: &str = "✓";
    pub const POINTER: &str = "▼";
    pub const BULB: &str = "●";
    pub const RIM: &str = "·";
    pub const SWATCH: &str = "██";
    pub const PARTY: &str = "🎉";

    pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_labels_contrast_with_their_fill() {
        let theme = Theme::new();
        assert_eq!(
            theme.wedge_label(SegmentColor::rgb(255, 255, 0)).fg,
            Some(Color::Black)
        );
        assert_eq!(
            theme.wedge_label(SegmentColor::rgb(0, 0, 255)).fg,
            Some(Color::White)
        );
    }

    #[test]
    fn segment_colors_map_to_rgb() {
        assert_eq!(
            segment_color(SegmentColor::rgb(1, 2, 3)),
            Color::Rgb(1, 2, 3)
        );
    }
}
