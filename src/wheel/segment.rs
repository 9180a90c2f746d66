//! Wheel segments and their colors

use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use super::{ColorParseError, WheelError};

/// An RGB color attached to a segment, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SegmentColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in `0.0..=1.0`, used to pick readable label text
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

impl FromStr for SegmentColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ColorParseError::Format(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::Format(s.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for SegmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One labeled wedge of the wheel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub id: u32,
    pub label: String,
    pub color: SegmentColor,
}

impl Segment {
    pub fn new(id: u32, label: impl Into<String>, color: SegmentColor) -> Self {
        Self {
            id,
            label: label.into(),
            color,
        }
    }
}

/// The ordered, non-empty list of segments on one wheel.
///
/// Order is angular position: segment `i` covers `[i * width, (i + 1) * width)`
/// degrees clockwise from the top of the unrotated wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    items: Vec<Segment>,
}

impl Segments {
    /// Validate and wrap a segment list
    pub fn new(items: Vec<Segment>) -> Result<Self, WheelError> {
        if items.is_empty() {
            return Err(WheelError::NoSegments);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for segment in &items {
            if segment.id == 0 {
                return Err(WheelError::ZeroSegmentId);
            }
            if !seen.insert(segment.id) {
                return Err(WheelError::DuplicateSegmentId(segment.id));
            }
        }

        Ok(Self { items })
    }

    /// Number of segments, never zero
    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Angular width of one segment in degrees
    pub fn segment_width(&self) -> f64 {
        360.0 / self.items.len() as f64
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(id: u32, label: &str) -> Segment {
        Segment::new(id, label, SegmentColor::rgb(0, 0, 0))
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            "#FF00ff".parse::<SegmentColor>(),
            Ok(SegmentColor::rgb(255, 0, 255))
        );
        assert_eq!(SegmentColor::rgb(0, 171, 193).to_string(), "#00ABC1");
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["FF0000", "#FF00", "#GG0000", "#FF00000", "", "#ÿÿÿ"] {
            assert!(
                bad.parse::<SegmentColor>().is_err(),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(Segments::new(Vec::new()), Err(WheelError::NoSegments));
    }

    #[test]
    fn ids_must_be_positive_and_unique() {
        assert_eq!(
            Segments::new(vec![seg(1, "a"), seg(0, "b")]),
            Err(WheelError::ZeroSegmentId)
        );
        assert_eq!(
            Segments::new(vec![seg(1, "a"), seg(2, "b"), seg(1, "c")]),
            Err(WheelError::DuplicateSegmentId(1))
        );
    }

    #[test]
    fn width_splits_the_circle_evenly() {
        let segments = Segments::new((1..=8).map(|i| seg(i, "x")).collect()).unwrap();
        assert_eq!(segments.count().get(), 8);
        assert_eq!(segments.segment_width(), 45.0);
    }

    #[test]
    fn luminance_orders_light_above_dark() {
        assert!(SegmentColor::rgb(255, 255, 0).luminance() > 0.8);
        assert!(SegmentColor::rgb(0, 0, 255).luminance() < 0.2);
    }
}
