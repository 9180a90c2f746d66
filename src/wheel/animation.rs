//! Visual interpolation of a spin

use std::time::Duration;

/// The rotation a spin animates through.
///
/// The controller commits the target immediately; the surface eases from
/// `from` to `to` over `duration`, decelerating toward the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinMotion {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

impl SpinMotion {
    /// Fraction of the spin that has played, in `0.0..=1.0`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Rotation to draw `elapsed` into the spin
    pub fn rotation_at(&self, elapsed: Duration) -> f64 {
        let t = self.progress(elapsed);
        // cubic ease-out
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion() -> SpinMotion {
        SpinMotion {
            from: 90.0,
            to: 3690.0,
            duration: Duration::from_millis(4000),
        }
    }

    #[test]
    fn starts_and_ends_on_the_committed_angles() {
        let m = motion();
        assert_eq!(m.rotation_at(Duration::ZERO), 90.0);
        assert_eq!(m.rotation_at(Duration::from_millis(4000)), 3690.0);
        assert_eq!(m.rotation_at(Duration::from_secs(60)), 3690.0);
        assert!(m.is_finished(Duration::from_millis(4000)));
        assert!(!m.is_finished(Duration::from_millis(3999)));
    }

    #[test]
    fn decelerates_and_never_runs_backwards() {
        let m = motion();
        let mut previous = m.from;
        let mut previous_step = f64::INFINITY;
        for ms in (100..=4000).step_by(100) {
            let now = m.rotation_at(Duration::from_millis(ms));
            let step = now - previous;
            assert!(step >= 0.0, "rotation went backwards at {ms}ms");
            assert!(step <= previous_step + 1e-9, "spin sped up at {ms}ms");
            previous = now;
            previous_step = step;
        }
    }

    #[test]
    fn halfway_in_time_is_well_past_halfway_in_angle() {
        let m = motion();
        let half = m.rotation_at(Duration::from_millis(2000));
        assert!(half > m.from + (m.to - m.from) * 0.8);
    }
}
