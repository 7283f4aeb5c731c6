//! Typewriter text rotation.
//!
//! Cycles through a fixed phrase list, typing each phrase one character per
//! tick, holding it, then deleting it faster than it was typed.
//!
//! ```text
//!            char_index <= len          char_index > len
//! Typing ──────────(type tick)────▶ Typing ───▶ Holding
//!                                                 │ (hold)
//!                                                 ▼
//! Typing(next phrase) ◀── char_index < 0 ── Deleting ◀─┐
//!                                             └─(delete tick)
//! ```
//!
//! The transition function lives on [`TypingState`]; [`TypewriterRotator`]
//! adds the single pending timer.

use std::sync::Arc;
use std::time::Duration;

use super::timer::{Scheduler, TimerHandle};
use super::{MotionConfigError, TypingTiming};

/// Immutable, non-empty list of phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList(Arc<[String]>);

impl PhraseList {
    /// Builds a phrase list.
    ///
    /// # Errors
    /// Returns [`MotionConfigError::EmptyPhraseList`] if no phrase is given.
    pub fn new<I, S>(phrases: I) -> Result<Self, MotionConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(MotionConfigError::EmptyPhraseList);
        }
        Ok(Self(phrases.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Phrase at `index`, wrapping around the list.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Which step the next tick performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
    Deleting,
}

/// Animation state of the typewriter line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypingState {
    role_index: usize,
    char_index: isize,
    display: String,
    deleting: bool,
}

impl TypingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn char_index(&self) -> isize {
        self.char_index
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phase(&self, phrases: &PhraseList) -> TypingPhase {
        let len = phrase_len(phrases.get(self.role_index));
        if self.deleting {
            TypingPhase::Deleting
        } else if self.char_index > len {
            TypingPhase::Holding
        } else {
            TypingPhase::Typing
        }
    }

    /// Delay before the next tick.
    pub fn delay(&self, phrases: &PhraseList, timing: &TypingTiming) -> Duration {
        match self.phase(phrases) {
            TypingPhase::Typing => timing.type_interval,
            TypingPhase::Holding => timing.hold,
            TypingPhase::Deleting => timing.delete_interval,
        }
    }

    /// Advances the animation by one tick.
    ///
    /// Running out of characters while deleting moves to the next phrase within
    /// the same tick.
    pub fn tick(&mut self, phrases: &PhraseList) {
        let phrase = phrases.get(self.role_index);
        match self.phase(phrases) {
            TypingPhase::Typing => {
                self.char_index += 1;
                self.display = prefix(phrase, self.char_index);
            }
            TypingPhase::Holding => {
                self.deleting = true;
            }
            TypingPhase::Deleting => {
                self.char_index -= 1;
                self.display = prefix(phrase, self.char_index);
                if self.char_index < 0 {
                    self.deleting = false;
                    self.role_index = (self.role_index + 1) % phrases.len();
                    self.char_index = 0;
                }
            }
        }
    }
}

fn phrase_len(phrase: &str) -> isize {
    phrase.chars().count() as isize
}

fn prefix(phrase: &str, char_index: isize) -> String {
    phrase.chars().take(char_index.max(0) as usize).collect()
}

/// Typewriter with at most one pending timer.
#[derive(Debug, Clone)]
pub struct TypewriterRotator {
    phrases: PhraseList,
    timing: TypingTiming,
    state: TypingState,
    pending: Option<TimerHandle>,
}

impl TypewriterRotator {
    pub fn new(phrases: PhraseList, timing: TypingTiming) -> Self {
        Self {
            phrases,
            timing,
            state: TypingState::new(),
            pending: None,
        }
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Schedules the next tick unless one is already pending.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        if self.pending.is_none() {
            self.schedule(scheduler);
        }
    }

    /// Handles a fired timer. Anything but the pending handle is stale and
    /// ignored. Returns true if the state advanced.
    pub fn on_timer(&mut self, handle: TimerHandle, scheduler: &mut dyn Scheduler) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        self.state.tick(&self.phrases);
        self.schedule(scheduler);
        true
    }

    /// Cancels the pending tick. The state is kept as is.
    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    /// Stops and rewinds to the first phrase.
    pub fn reset(&mut self, scheduler: &mut dyn Scheduler) {
        self.stop(scheduler);
        self.state = TypingState::new();
    }

    fn schedule(&mut self, scheduler: &mut dyn Scheduler) {
        let delay = self.state.delay(&self.phrases, &self.timing);
        self.pending = Some(scheduler.schedule_once(delay));
    }
}
