//! Busy indicator shown while the wheel turns

use crate::theme::symbols::SPINNER;

/// An animated spinner glyph with a caption
#[derive(Debug, Clone)]
pub struct Spinner {
    frame: usize,
    message: String,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            frame: 0,
            message: "Spinning...".to_string(),
        }
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advance to the next frame
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER.len();
    }

    /// Get the current spinner character
    pub fn char(&self) -> &'static str {
        SPINNER[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_every_frame() {
        let mut spinner = Spinner::new();
        let first = spinner.char();
        for _ in 0..SPINNER.len() {
            spinner.tick();
        }
        assert_eq!(spinner.char(), first);
        spinner.tick();
        assert_ne!(spinner.char(), first);
        assert_eq!(spinner.message(), "Spinning...");
    }
}
