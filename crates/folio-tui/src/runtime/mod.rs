//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! The reducer stays pure and returns effects; every side effect happens
//! here. Async results come back through the inbox channel and are drained
//! once per loop iteration.
//!
//! Time reaches the page only as `UiEvent::Tick { elapsed }`. A tick is
//! emitted at the tick cadence and whenever the timer queue has a deadline
//! due, and the terminal poll never blocks past the next deadline.

mod handlers;
mod inbox;

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use folio_core::config::Config;
use folio_core::interrupt::{self, InterruptedError};
use inbox::{UiEventReceiver, UiEventSender};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, PageTerminal};
use crate::{render, update};

/// Tick cadence right after user input (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Tick cadence when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen page runtime. The terminal is restored on drop.
pub struct TuiRuntime {
    terminal: PageTerminal,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    /// Origin of the virtual time axis fed to the timer queue.
    started: Instant,
    last_tick: Instant,
    last_terminal_event: Instant,
    /// Kept alive so copied text survives on X11.
    clipboard: Option<arboard::Clipboard>,
}

impl TuiRuntime {
    /// Validates the configuration, then takes over the terminal.
    ///
    /// # Errors
    /// Returns an error for an invalid configuration or if the terminal
    /// cannot be set up.
    pub fn new(config: &Config) -> Result<Self> {
        // Build state first so a bad config never leaves the terminal in raw mode.
        let state = AppState::new(config)?;

        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = inbox::channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            started: now,
            last_tick: now,
            last_terminal_event: now,
            clipboard: None,
        })
    }

    /// Runs the event loop until the page quits.
    ///
    /// # Errors
    /// Returns [`InterruptedError`] after a SIGINT, or an error if terminal
    /// I/O fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if let Some(effects) = take_interrupt(&mut self.state) {
                self.execute_effects(effects);
                tracing::info!("interrupted");
                return Err(InterruptedError.into());
            }

            let mut events = self.collect_events()?;

            // Layout first, so input in this batch sees the current size.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render; input batches into the next frame.
                let marks_dirty = matches!(&event, UiEvent::Tick { .. });

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        tracing::info!("event loop finished");
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_input = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if recent_input || self.state.contact.is_sending() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Wake up for the next tick or the next timer, whichever is first.
        let mut wait = tick_interval.saturating_sub(self.last_tick.elapsed());
        if let Some(deadline) = self.state.timers.next_deadline() {
            wait = wait.min(deadline.saturating_sub(self.started.elapsed()));
        }
        let poll_duration = if events.is_empty() {
            wait
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        let elapsed = self.started.elapsed();
        let timer_due = self
            .state
            .timers
            .next_deadline()
            .is_some_and(|deadline| deadline <= elapsed);
        if timer_due || self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick { elapsed });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    /// Spawns an async handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::OpenLink { target } => {
                if let Some(event) = handlers::open_link(&target) {
                    self.dispatch_event(event);
                }
            }
            UiEffect::CopyToClipboard { text } => {
                let event = handlers::copy_to_clipboard(&mut self.clipboard, &text);
                self.dispatch_event(event);
            }
            UiEffect::SubmitContact {
                task,
                submission,
                cancel,
            } => {
                self.spawn_effect(move || handlers::deliver_contact(task, submission, cancel));
            }
            UiEffect::CancelTask { token } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
        }
    }
}

/// Consumes a pending SIGINT. The page is torn down and the returned effects
/// must still run before the loop exits.
fn take_interrupt(state: &mut AppState) -> Option<Vec<UiEffect>> {
    if !interrupt::is_interrupted() {
        return None;
    }
    interrupt::reset();
    Some(update::update(state, UiEvent::Interrupted))
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigint_quits_the_page_once() {
        let mut state = AppState::new(&Config::default()).unwrap();

        interrupt::reset();
        assert!(take_interrupt(&mut state).is_none());
        assert!(!state.should_quit);

        interrupt::trigger();
        let effects = take_interrupt(&mut state).unwrap();
        assert!(matches!(effects.last(), Some(UiEffect::Quit)));
        assert!(!state.hero.is_running());
        assert!(!interrupt::is_interrupted());
        assert!(take_interrupt(&mut state).is_none());
    }

    #[test]
    fn test_interrupted_error_survives_context() {
        let err: anyhow::Error = InterruptedError.into();
        let err = err.context("interactive page failed");
        assert!(err.downcast_ref::<InterruptedError>().is_some());
    }
}
