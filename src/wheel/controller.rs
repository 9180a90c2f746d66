//! Spin controller
//!
//! Owns the rotation and spin state of one wheel. Accepting a spin commits
//! the target rotation at once and arms a single timer; the winner is only
//! worked out when that timer comes back.

use super::animation::SpinMotion;
use super::draw::{SpinDraw, SpinSource};
use super::resolver::resolve;
use super::scheduler::{Cancel, Scheduler, SpinTicket};
use super::segment::Segment;
use super::variant::WheelConfig;

/// Observable state of a wheel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinState {
    /// Cumulative rotation in degrees, never folded back into one turn
    pub current_rotation: f64,
    pub is_spinning: bool,
    pub last_result: Option<Segment>,
    /// Whether the result dialog should be on screen
    pub result_visible: bool,
}

/// Outcome of [`Wheel::request_spin`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRequest {
    /// The spin started; animate through this motion
    Accepted(SpinMotion),
    /// A spin was already in flight
    Ignored,
}

struct PendingSpin<H> {
    ticket: SpinTicket,
    target: f64,
    handle: H,
}

/// One wheel instance
pub struct Wheel<S: Scheduler, D: SpinSource> {
    config: WheelConfig,
    state: SpinState,
    scheduler: S,
    draws: D,
    pending: Option<PendingSpin<S::Handle>>,
    next_ticket: u64,
    spins_completed: u64,
}

impl<S: Scheduler, D: SpinSource> Wheel<S, D> {
    pub fn new(config: WheelConfig, scheduler: S, draws: D) -> Self {
        Self {
            config,
            state: SpinState::default(),
            scheduler,
            draws,
            pending: None,
            next_ticket: 1,
            spins_completed: 0,
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    pub fn spins_completed(&self) -> u64 {
        self.spins_completed
    }

    /// Start a spin unless one is already in flight
    pub fn request_spin(&mut self) -> SpinRequest {
        if self.state.is_spinning {
            log::debug!("Spin requested while spinning; ignoring");
            return SpinRequest::Ignored;
        }

        let draw = self.draws.draw(self.config.extra_turns());
        self.start_spin(draw)
    }

    fn start_spin(&mut self, draw: SpinDraw) -> SpinRequest {
        let from = self.state.current_rotation;
        let target = from + draw.degrees();

        self.state.is_spinning = true;
        self.state.result_visible = false;
        self.state.current_rotation = target;

        let ticket = SpinTicket(self.next_ticket);
        self.next_ticket += 1;

        let duration = self.config.spin_duration();
        let handle = self.scheduler.schedule_once(duration, ticket);
        self.pending = Some(PendingSpin {
            ticket,
            target,
            handle,
        });

        log::info!(
            "Spin {} accepted: {} extra turns + {}° -> {:.0}°",
            ticket.0,
            draw.extra_turns,
            draw.offset_degrees,
            target
        );

        SpinRequest::Accepted(SpinMotion {
            from,
            to: target,
            duration,
        })
    }

    /// Resolve the spin identified by `ticket`.
    ///
    /// Returns the winning segment, or `None` when the ticket does not belong
    /// to the spin in flight.
    pub fn complete_spin(&mut self, ticket: SpinTicket) -> Option<&Segment> {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                log::debug!("Ignoring stale spin ticket {}", ticket.0);
                return None;
            }
        };

        let winner = resolve(pending.target, self.config.segments()).clone();
        log::info!("Spin {} landed on {:?}", ticket.0, winner.label);

        self.state.last_result = Some(winner);
        self.state.is_spinning = false;
        self.state.result_visible = true;
        self.spins_completed += 1;

        self.state.last_result.as_ref()
    }

    /// Hide the result dialog; nothing else changes
    pub fn dismiss_result(&mut self) {
        self.state.result_visible = false;
    }

    /// Call off the spin in flight, if any.
    ///
    /// The committed rotation stays where it is; no result is recorded.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.handle.cancel();
                self.state.is_spinning = false;
                log::info!("Spin {} cancelled", pending.ticket.0);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: Scheduler, D: SpinSource> Drop for Wheel<S, D> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
