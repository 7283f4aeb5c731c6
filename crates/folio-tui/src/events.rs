//! UI event types.
//!
//! Everything the reducer reacts to arrives as a [`UiEvent`]: terminal input,
//! the frame size, clock ticks and results from background effects.

use std::time::Duration;

use crossterm::event::Event;

use crate::common::TaskId;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Clock tick. `elapsed` is the time since the runtime started and drives
    /// the timer queue.
    Tick { elapsed: Duration },

    /// Current terminal size, sent first in every loop iteration.
    Frame { width: u16, height: u16 },

    /// Raw terminal input.
    Terminal(Event),

    /// SIGINT from outside the terminal (raw mode turns Ctrl+C into a key).
    Interrupted,

    /// The simulated contact delivery finished.
    ContactDelivered { task: TaskId },

    /// The simulated contact delivery was cancelled before it finished.
    ContactCancelled { task: TaskId },

    /// Text was placed on the clipboard.
    Copied,

    /// An effect failed; shown to the user as an error notice.
    EffectFailed { message: String },
}
