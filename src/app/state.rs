//! Game state
//!
//! Everything the app tracks between frames apart from the terminal, so key
//! handling and spin resolution can be driven without a tty.

use std::time::Instant;

use crate::components::{Marquee, Spinner};
use crate::config::Config;
use crate::wheel::{
    Scheduler, SpinMotion, SpinSource, SpinTicket, Variant, Wheel, WheelError,
};

/// Model half of the app
pub struct GameState<S: Scheduler + Clone, D: SpinSource> {
    /// User configuration
    pub(super) config: Config,

    /// Set when `config` changed and should be written out
    pub(super) config_dirty: bool,

    /// Wheel currently on stage
    pub(super) variant: Variant,
    pub(super) wheel: Wheel<S, D>,

    /// Spin being animated and when it started
    pub(super) animation: Option<(SpinMotion, Instant)>,

    /// Shown in the status box while spinning
    pub(super) spinner: Spinner,

    /// Rim lights
    pub(super) marquee: Marquee,

    /// Show help popup
    pub(super) show_help: bool,

    /// Show logs popup
    pub(super) show_logs: bool,

    /// Error message
    pub(super) error: Option<String>,

    /// Should quit
    pub(super) should_quit: bool,

    scheduler: S,
    new_draws: fn() -> D,
}

impl<S: Scheduler + Clone, D: SpinSource> GameState<S, D> {
    /// Put the configured wheel on stage
    pub fn new(config: Config, scheduler: S, new_draws: fn() -> D) -> Result<Self, WheelError> {
        let variant = config.variant;
        let wheel = Wheel::new(variant.config()?, scheduler.clone(), new_draws());

        log::info!(
            "Loaded {:?} wheel with {} segments",
            variant,
            wheel.config().segments().count()
        );

        Ok(Self {
            config,
            config_dirty: false,
            variant,
            wheel,
            animation: None,
            spinner: Spinner::new(),
            marquee: Marquee::new(),
            show_help: false,
            show_logs: false,
            error: None,
            should_quit: false,
            scheduler,
            new_draws,
        })
    }

    pub fn on_tick(&mut self) {
        let spinning = self.wheel.is_spinning();
        if spinning {
            self.spinner.tick();
        }
        self.marquee.tick(spinning);

        let settled = self
            .animation
            .as_ref()
            .is_some_and(|(motion, started)| motion.is_finished(started.elapsed()));
        if settled && !spinning {
            self.animation = None;
        }
    }

    pub fn on_spin_resolved(&mut self, ticket: SpinTicket) {
        if let Some(prize) = self.wheel.complete_spin(ticket) {
            log::info!("Showing prize {:?}", prize.label);
        }
    }

    /// Call off any spin in flight before the app exits
    pub fn shutdown(&mut self) {
        if self.wheel.cancel_pending() {
            self.animation = None;
        }
    }

    /// Rotation to draw right now
    pub fn displayed_rotation(&self) -> f64 {
        match &self.animation {
            Some((motion, started)) => motion.rotation_at(started.elapsed()),
            None => self.wheel.state().current_rotation,
        }
    }

    /// Text on the centre hub; blank while the wheel turns
    pub fn hub_label(&self) -> &'static str {
        if self.wheel.is_spinning() {
            ""
        } else {
            "SPIN"
        }
    }

    /// Status box text while a spin is in flight
    pub fn status(&self) -> Option<String> {
        self.wheel
            .is_spinning()
            .then(|| format!("{} {}", self.spinner.char(), self.spinner.message()))
    }

    /// Replace the wheel on stage
    pub(super) fn load_variant(&mut self, variant: Variant) -> Result<(), WheelError> {
        self.wheel = Wheel::new(
            variant.config()?,
            self.scheduler.clone(),
            (self.new_draws)(),
        );
        self.variant = variant;
        self.animation = None;
        log::info!("Switched to the {:?} wheel", variant);
        Ok(())
    }

    /// Get contextual footer hint
    pub fn footer_hint(&self) -> &'static str {
        if self.error.is_some() {
            return "Press Esc to dismiss error";
        }

        if self.wheel.state().result_visible {
            return "Enter: claim prize | q: quit";
        }

        if self.show_help {
            return "Press ? or Esc to close help";
        }

        if self.show_logs {
            return "l/Esc: close logs";
        }

        if self.wheel.is_spinning() {
            "Spinning... | l: logs | ?: help | q: quit"
        } else {
            "Space: spin | v: switch wheel | l: logs | ?: help | q: quit"
        }
    }
}
