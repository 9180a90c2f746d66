//! Random draws for a spin

use std::ops::RangeInclusive;

use rand::Rng;

/// The two random values behind one spin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinDraw {
    /// Full turns added for show
    pub extra_turns: u32,
    /// Final offset in `[0, 360)`
    pub offset_degrees: u32,
}

impl SpinDraw {
    /// Degrees this draw adds to the wheel's rotation
    pub fn degrees(&self) -> f64 {
        f64::from(self.extra_turns) * 360.0 + f64::from(self.offset_degrees)
    }
}

/// Source of spin draws
pub trait SpinSource {
    fn draw(&mut self, extra_turns: &RangeInclusive<u32>) -> SpinDraw;
}

/// Uniform draws from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomDraws<R> {
    rng: R,
}

impl<R: Rng> RandomDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SpinSource for RandomDraws<R> {
    fn draw(&mut self, extra_turns: &RangeInclusive<u32>) -> SpinDraw {
        SpinDraw {
            extra_turns: self.rng.gen_range(extra_turns.clone()),
            offset_degrees: self.rng.gen_range(0..360),
        }
    }
}

/// Replays a fixed list of draws, then repeats the last one
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    draws: std::collections::VecDeque<SpinDraw>,
    last: SpinDraw,
}

#[cfg(test)]
impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let draws: std::collections::VecDeque<SpinDraw> = draws
            .into_iter()
            .map(|(extra_turns, offset_degrees)| SpinDraw {
                extra_turns,
                offset_degrees,
            })
            .collect();
        let last = draws.back().copied().unwrap_or(SpinDraw {
            extra_turns: 1,
            offset_degrees: 0,
        });
        Self { draws, last }
    }
}

#[cfg(test)]
impl SpinSource for ScriptedDraws {
    fn draw(&mut self, _extra_turns: &RangeInclusive<u32>) -> SpinDraw {
        self.draws.pop_front().unwrap_or(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_draws_stay_in_range() {
        let mut source = RandomDraws::new(StdRng::seed_from_u64(7));
        for _ in 0..2000 {
            let draw = source.draw(&(5..=10));
            assert!((5..=10).contains(&draw.extra_turns));
            assert!(draw.offset_degrees < 360);
        }
    }

    #[test]
    fn random_draws_cover_the_whole_turn_range() {
        let mut source = RandomDraws::new(StdRng::seed_from_u64(42));
        let mut seen = [false; 13];
        for _ in 0..2000 {
            seen[source.draw(&(8..=12)).extra_turns as usize] = true;
        }
        assert!(seen[8..=12].iter().all(|hit| *hit));
    }

    #[test]
    fn draw_degrees_add_turns_and_offset() {
        let draw = SpinDraw {
            extra_turns: 3,
            offset_degrees: 45,
        };
        assert_eq!(draw.degrees(), 1125.0);
    }

    #[test]
    fn scripted_draws_replay_in_order() {
        let mut source = ScriptedDraws::new([(8, 0), (9, 90)]);
        assert_eq!(source.draw(&(1..=1)).offset_degrees, 0);
        assert_eq!(source.draw(&(1..=1)).offset_degrees, 90);
        assert_eq!(source.draw(&(1..=1)).extra_turns, 9);
    }
}
