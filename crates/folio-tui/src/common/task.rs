//! Background task bookkeeping.
//!
//! The reducer allocates a [`TaskId`] when it asks the runtime to spawn work
//! and keeps the cancellation token. Completion events carry the id back, so a
//! result from a cancelled or superseded task is recognised and dropped.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Lifecycle of one kind of background task (stored in state, mutated only by
/// the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, id: TaskId, cancel: CancellationToken) {
        self.active = Some(id);
        self.cancel = Some(cancel);
    }

    /// Clears the task if `id` is the active one. Returns false for stale ids.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    /// Forgets the active task and hands back its token for cancellation.
    pub fn take_cancel(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.cancel.take()
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();

        let first = seq.next_id();
        state.on_started(first, CancellationToken::new());
        let token = state.take_cancel();
        assert!(token.is_some());
        assert!(!state.is_running());

        let second = seq.next_id();
        state.on_started(second, CancellationToken::new());
        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }
}
