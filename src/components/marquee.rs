//! Marquee lights around the wheel rim

/// Number of bulbs on the rim, one every 15 degrees
pub const BULB_COUNT: usize = 24;

/// Ticks between idle twinkles
const IDLE_TICKS_PER_STEP: u32 = 8;

/// Chasing bulb pattern.
///
/// While the wheel spins every third bulb is lit and the pattern moves one
/// bulb per tick; at rest alternate bulbs swap slowly.
#[derive(Debug, Clone, Default)]
pub struct Marquee {
    phase: usize,
    idle_ticks: u32,
    chasing: bool,
}

impl Marquee {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, spinning: bool) {
        self.chasing = spinning;
        if spinning {
            self.phase = (self.phase + 1) % BULB_COUNT;
            self.idle_ticks = 0;
            return;
        }

        self.idle_ticks += 1;
        if self.idle_ticks >= IDLE_TICKS_PER_STEP {
            self.idle_ticks = 0;
            self.phase = (self.phase + 1) % BULB_COUNT;
        }
    }

    /// Angle of a bulb in degrees clockwise from the top
    pub fn bulb_angle(bulb: usize) -> f64 {
        (bulb % BULB_COUNT) as f64 * (360.0 / BULB_COUNT as f64)
    }

    pub fn is_lit(&self, bulb: usize) -> bool {
        let shifted = (bulb + BULB_COUNT - self.phase % BULB_COUNT) % BULB_COUNT;
        if self.chasing {
            shifted % 3 == 0
        } else {
            shifted % 2 == 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(marquee: &Marquee) -> Vec<usize> {
        (0..BULB_COUNT).filter(|b| marquee.is_lit(*b)).collect()
    }

    #[test]
    fn bulbs_are_fifteen_degrees_apart() {
        assert_eq!(Marquee::bulb_angle(0), 0.0);
        assert_eq!(Marquee::bulb_angle(1), 15.0);
        assert_eq!(Marquee::bulb_angle(23), 345.0);
    }

    #[test]
    fn chase_moves_one_bulb_per_tick() {
        let mut marquee = Marquee::new();
        marquee.tick(true);
        let before = lit(&marquee);
        assert_eq!(before.len(), BULB_COUNT / 3);

        marquee.tick(true);
        let after = lit(&marquee);
        let shifted: Vec<usize> = before.iter().map(|b| (b + 1) % BULB_COUNT).collect();
        let mut expected = shifted;
        expected.sort_unstable();
        assert_eq!(after, expected);
    }

    #[test]
    fn idle_pattern_changes_slowly() {
        let mut marquee = Marquee::new();
        marquee.tick(false);
        let first = lit(&marquee);
        assert_eq!(first.len(), BULB_COUNT / 2);

        for _ in 0..IDLE_TICKS_PER_STEP - 2 {
            marquee.tick(false);
        }
        assert_eq!(lit(&marquee), first);

        marquee.tick(false);
        assert_ne!(lit(&marquee), first);
    }
}
