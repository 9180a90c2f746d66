//! Built-in wheel variants
//!
//! The two wheels differ only in their prize list, how many extra turns a
//! spin adds, and how long the spin takes.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::segment::{Segment, Segments};
use super::WheelError;

/// Classic wheel prizes: (id, label, color)
const CLASSIC_PRIZES: &[(u32, &str, &str)] = &[
    (1, "100 Coins", "#FF0000"),
    (2, "50 Coins", "#0000FF"),
    (3, "Free Spin", "#00FF00"),
    (4, "25 Coins", "#FFFF00"),
    (5, "Bonus Round", "#FF00FF"),
    (6, "10 Coins", "#00FFFF"),
];

/// Deluxe wheel prizes: (id, label, color)
const DELUXE_PRIZES: &[(u32, &str, &str)] = &[
    (1, "100 Coins", "#E53935"),
    (2, "50 Coins", "#1E88E5"),
    (3, "Free Spin", "#43A047"),
    (4, "25 Coins", "#FDD835"),
    (5, "Bonus Round", "#8E24AA"),
    (6, "10 Coins", "#00ACC1"),
    (7, "500 Coins", "#FB8C00"),
    (8, "Jackpot", "#FFD700"),
];

/// Which built-in wheel to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Deluxe,
}

impl Variant {
    pub fn all() -> &'static [Variant] {
        &[Variant::Classic, Variant::Deluxe]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Variant::Classic => " Classic ",
            Variant::Deluxe => " Deluxe ",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Variant::Classic => 0,
            Variant::Deluxe => 1,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Variant::Classic => Variant::Deluxe,
            Variant::Deluxe => Variant::Classic,
        }
    }

    /// Build the fixed configuration for this variant
    pub fn config(&self) -> Result<WheelConfig, WheelError> {
        let (prizes, extra_turns, millis) = match self {
            Variant::Classic => (CLASSIC_PRIZES, 8..=12, 5000),
            Variant::Deluxe => (DELUXE_PRIZES, 5..=10, 4000),
        };

        let segments = prizes
            .iter()
            .map(|&(id, label, color)| Ok(Segment::new(id, label, color.parse()?)))
            .collect::<Result<Vec<_>, WheelError>>()?;

        WheelConfig::new(
            Segments::new(segments)?,
            extra_turns,
            Duration::from_millis(millis),
        )
    }
}

/// Validated settings for one wheel instance
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    segments: Segments,
    extra_turns: RangeInclusive<u32>,
    spin_duration: Duration,
}

impl WheelConfig {
    pub fn new(
        segments: Segments,
        extra_turns: RangeInclusive<u32>,
        spin_duration: Duration,
    ) -> Result<Self, WheelError> {
        let (min, max) = (*extra_turns.start(), *extra_turns.end());
        if min == 0 || min > max {
            return Err(WheelError::InvalidTurnRange { min, max });
        }
        if spin_duration.is_zero() {
            return Err(WheelError::ZeroSpinDuration);
        }

        Ok(Self {
            segments,
            extra_turns,
            spin_duration,
        })
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Inclusive range of full turns added to every spin
    pub fn extra_turns(&self) -> &RangeInclusive<u32> {
        &self.extra_turns
    }

    pub fn spin_duration(&self) -> Duration {
        self.spin_duration
    }
}
