//! Key event handlers
//!
//! Popups take keys first, in the order they are stacked on screen; only
//! when none is open do keys reach the wheel.

use crossterm::event::KeyEvent;
use std::time::Instant;

use crate::event::keys;
use crate::wheel::{Scheduler, SpinRequest, SpinSource};

use super::state::GameState;

impl<S: Scheduler + Clone, D: SpinSource> GameState<S, D> {
    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dismissal first
        if self.error.is_some() {
            if keys::is_escape(&key) || keys::is_enter(&key) {
                self.error = None;
            }
            return;
        }

        // Result dialog is modal
        if self.wheel.state().result_visible {
            if keys::is_enter(&key) || keys::is_escape(&key) {
                self.claim_prize();
            } else if keys::is_quit(&key) {
                self.should_quit = true;
            }
            return;
        }

        if self.show_help {
            if keys::is_escape(&key) || keys::is_char(&key, '?') {
                self.show_help = false;
            }
            return;
        }

        if self.show_logs {
            if keys::is_escape(&key) || keys::is_char(&key, 'l') {
                self.show_logs = false;
            }
            return;
        }

        // Global keys
        if keys::is_quit(&key) {
            self.should_quit = true;
        } else if keys::is_char(&key, '?') {
            self.show_help = true;
        } else if keys::is_char(&key, 'l') {
            self.show_logs = true;
        } else if keys::is_char(&key, 'v') {
            self.switch_variant();
        } else if keys::is_spin(&key) {
            self.spin();
        }
    }

    /// Ask the wheel for a spin and start animating it
    fn spin(&mut self) {
        match self.wheel.request_spin() {
            SpinRequest::Accepted(motion) => {
                self.animation = Some((motion, Instant::now()));
            }
            SpinRequest::Ignored => {}
        }
    }

    /// Close the result dialog
    fn claim_prize(&mut self) {
        if let Some(prize) = &self.wheel.state().last_result {
            log::info!("Prize claimed: {}", prize.label);
        }
        self.wheel.dismiss_result();
    }

    /// Swap to the other wheel and remember the choice
    fn switch_variant(&mut self) {
        if self.wheel.is_spinning() {
            log::info!("Wait for the wheel to stop before switching");
            return;
        }

        let next = self.variant.next();
        match self.load_variant(next) {
            Ok(()) => {
                self.config.variant = next;
                self.config_dirty = true;
            }
            Err(e) => {
                log::error!("Failed to load {:?} wheel: {}", next, e);
                self.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::config::Config;
    use crate::wheel::{ManualScheduler, ScriptedDraws, Variant};

    type TestState = GameState<ManualScheduler, ScriptedDraws>;

    /// 8 turns + 90° on the Classic wheel lands on "Bonus Round"
    fn draws() -> ScriptedDraws {
        ScriptedDraws::new([(8, 90)])
    }

    fn setup() -> (TestState, ManualScheduler) {
        let clock = ManualScheduler::default();
        let state = GameState::new(Config::default(), clock.clone(), draws).unwrap();
        (state, clock)
    }

    fn press(state: &mut TestState, code: KeyCode) {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn finish_spin(state: &mut TestState, clock: &ManualScheduler) {
        for ticket in clock.advance(Duration::from_secs(5)) {
            state.on_spin_resolved(ticket);
        }
    }

    #[test]
    fn switching_wheels_waits_for_the_spin_to_stop() {
        let (mut state, clock) = setup();

        press(&mut state, KeyCode::Char(' '));
        assert!(state.wheel.is_spinning());

        press(&mut state, KeyCode::Char('v'));
        assert_eq!(state.variant, Variant::Classic);
        assert!(state.wheel.is_spinning());
        assert!(!state.config_dirty);
        assert_eq!(clock.pending(), 1);

        finish_spin(&mut state, &clock);
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Char('v'));
        assert_eq!(state.variant, Variant::Deluxe);
        assert_eq!(state.config.variant, Variant::Deluxe);
        assert!(state.config_dirty);
        assert_eq!(state.wheel.config().segments().count().get(), 8);
        assert_eq!(state.wheel.state().current_rotation, 0.0);
    }

    #[test]
    fn result_dialog_swallows_keys_and_claiming_only_hides_it() {
        let (mut state, clock) = setup();
        press(&mut state, KeyCode::Char(' '));
        finish_spin(&mut state, &clock);

        let before = state.wheel.state().clone();
        assert!(before.result_visible);
        assert_eq!(before.last_result.as_ref().unwrap().label, "Bonus Round");

        press(&mut state, KeyCode::Char('?'));
        press(&mut state, KeyCode::Char('l'));
        press(&mut state, KeyCode::Char('v'));
        press(&mut state, KeyCode::Char(' '));
        assert!(!state.show_help);
        assert!(!state.show_logs);
        assert_eq!(state.variant, Variant::Classic);
        assert_eq!(clock.armed(), 1);
        assert!(state.wheel.state().result_visible);

        press(&mut state, KeyCode::Esc);
        let after = state.wheel.state();
        assert!(!after.result_visible);
        assert!(!after.is_spinning);
        assert_eq!(after.current_rotation, before.current_rotation);
        assert_eq!(after.last_result, before.last_result);
        assert_eq!(state.wheel.spins_completed(), 1);
    }

    #[test]
    fn escape_closes_popups_from_the_top_down() {
        let (mut state, clock) = setup();

        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Char('?'));
        assert!(state.show_help);
        finish_spin(&mut state, &clock);
        state.show_logs = true;
        state.error = Some("disk full".to_string());

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.error, None);
        assert!(state.wheel.state().result_visible);

        press(&mut state, KeyCode::Esc);
        assert!(!state.wheel.state().result_visible);
        assert!(state.show_help);

        press(&mut state, KeyCode::Esc);
        assert!(!state.show_help);
        assert!(state.show_logs);

        press(&mut state, KeyCode::Esc);
        assert!(!state.show_logs);
        assert!(!state.should_quit);
    }

    #[test]
    fn quit_works_from_the_result_dialog() {
        let (mut state, clock) = setup();
        press(&mut state, KeyCode::Char('s'));
        finish_spin(&mut state, &clock);

        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }
}
