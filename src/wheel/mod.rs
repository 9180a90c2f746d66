//! Wheel engine
//!
//! Everything that decides what the wheel does, independent of how it is
//! drawn: the segment model, the spin controller, the resolver that picks a
//! winner, and the scheduling seam for the delayed resolution.

mod animation;
mod controller;
mod draw;
mod resolver;
mod scheduler;
mod segment;
mod variant;

pub use animation::SpinMotion;
pub use controller::{SpinRequest, Wheel};
pub use draw::{RandomDraws, SpinSource};
pub use resolver::{resolve, segment_index_at};
pub use scheduler::{Scheduler, SpinTicket, TokioScheduler};
pub use segment::{Segment, SegmentColor, Segments};
pub use variant::Variant;

#[cfg(test)]
pub use draw::ScriptedDraws;
#[cfg(test)]
pub use scheduler::ManualScheduler;

use thiserror::Error;

/// Errors raised while building a wheel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("a wheel needs at least one segment")]
    NoSegments,

    #[error("segment ids must be positive")]
    ZeroSegmentId,

    #[error("segment id {0} is used more than once")]
    DuplicateSegmentId(u32),

    #[error("extra turns range {min}..={max} is invalid (needs 1 <= min <= max)")]
    InvalidTurnRange { min: u32, max: u32 },

    #[error("spin duration must be greater than zero")]
    ZeroSpinDuration,

    #[error("invalid segment color: {0}")]
    Color(#[from] ColorParseError),
}

/// Errors parsing a `#RRGGBB` color literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected #RRGGBB, got {0:?}")]
    Format(String),
}
