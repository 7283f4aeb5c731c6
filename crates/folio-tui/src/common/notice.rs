//! Self-dismissing notices.
//!
//! A [`NoticeSlot`] holds at most one message together with the timer that
//! dismisses it. Showing a new notice cancels the previous timer, so an old
//! timeout never clears a newer message.

use std::time::Duration;

use folio_core::motion::{Scheduler, TimerHandle};

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
    timer: Option<TimerHandle>,
}

impl NoticeSlot {
    pub fn get(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind, scheduler: &mut dyn Scheduler) {
        self.cancel_timer(scheduler);
        self.current = Some(Notice {
            text: text.into(),
            kind,
        });
        self.timer = Some(scheduler.schedule_once(NOTICE_DURATION));
    }

    /// Dismisses the notice if `handle` is its timer.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            return false;
        }
        self.timer = None;
        self.current = None;
        true
    }

    pub fn clear(&mut self, scheduler: &mut dyn Scheduler) {
        self.cancel_timer(scheduler);
        self.current = None;
    }

    fn cancel_timer(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }
}
