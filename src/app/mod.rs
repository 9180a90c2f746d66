//! Application state and main event loop
//!
//! Follows the Elm Architecture (TEA) pattern:
//! - Model: GameState (state.rs)
//! - Update: handlers.rs
//! - View: render() method

mod handlers;
mod state;

use color_eyre::{eyre::eyre, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::event::{Event, EventHandler};
use crate::theme::Theme;
use crate::tui::{self, Tui};
use crate::ui;
use crate::wheel::{resolve, RandomDraws, TokioScheduler};

use state::GameState;

/// Game state as wired into the running app
type LiveState = GameState<TokioScheduler, RandomDraws<StdRng>>;

fn random_draws() -> RandomDraws<StdRng> {
    RandomDraws::new(StdRng::from_entropy())
}

/// Main application
pub struct App {
    /// Terminal instance
    terminal: Tui,

    /// Event handler
    events: EventHandler,

    /// Theme
    theme: Theme,

    state: LiveState,
}

impl App {
    /// Create a new application
    pub fn new(config: Config) -> Result<Self> {
        let events = EventHandler::new(config.tick_rate());
        let state = GameState::new(config, TokioScheduler::new(events.sender()), random_draws)?;
        let terminal = tui::init()?;

        Ok(Self {
            terminal,
            events,
            theme: Theme::new(),
            state,
        })
    }

    /// Main run loop; the terminal is restored however it ends
    pub async fn run(&mut self) -> Result<()> {
        let outcome = self.event_loop().await;

        self.state.shutdown();
        tui::restore()?;

        outcome
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.state.should_quit {
            self.render()?;

            match self.events.next().await? {
                Event::Tick => self.state.on_tick(),
                Event::Key(key) => self.state.handle_key(key),
                Event::Resize(_, _) => {
                    // Redrawn on the next pass
                }
                Event::SpinResolved(ticket) => self.state.on_spin_resolved(ticket),
                Event::Error(e) => {
                    log::error!("Terminal event error: {}", e);
                    return Err(eyre!("Terminal input failed: {}", e));
                }
            }

            if std::mem::take(&mut self.state.config_dirty) {
                self.state.config.save();
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self) -> Result<()> {
        let theme = &self.theme;
        let state = &self.state;
        let rotation = state.displayed_rotation();
        let spin = state.wheel.state();
        let segments = state.wheel.config().segments();
        let under_pointer = resolve(rotation, segments);
        let status = state.status();

        self.terminal.draw(|frame| {
            let (header_area, stage_area, panel_area, footer_area) =
                ui::main_layout(frame.area());

            ui::render_header(frame, theme, header_area, state.variant, status.as_deref());

            frame.render_widget(
                ui::WheelWidget {
                    segments,
                    rotation,
                    marquee: &state.marquee,
                    hub_label: state.hub_label(),
                    theme,
                },
                stage_area,
            );

            ui::render_prize_panel(
                frame,
                theme,
                panel_area,
                segments,
                ui::PanelInfo {
                    under_pointer,
                    last_result: spin.last_result.as_ref(),
                    spins_completed: state.wheel.spins_completed(),
                    spinning: spin.is_spinning,
                },
            );

            ui::render_footer(frame, theme, footer_area, state.footer_hint());

            if spin.result_visible {
                if let Some(prize) = spin.last_result.as_ref() {
                    ui::render_result_dialog(frame, theme, prize);
                }
            }

            if state.show_help {
                ui::render_help(frame, theme);
            }

            if state.show_logs {
                ui::render_logs(frame, theme);
            }

            if let Some(error) = state.error.as_deref() {
                ui::render_error_popup(frame, theme, error);
            }
        })?;

        Ok(())
    }
}
