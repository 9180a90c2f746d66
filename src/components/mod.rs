//! Reusable UI components

mod marquee;
mod spinner;

pub use marquee::{Marquee, BULB_COUNT};
pub use spinner::Spinner;
