//! One-shot timers on a virtual time axis.
//!
//! `TimerQueue` never reads the wall clock. The runtime feeds it the elapsed
//! time since startup via [`TimerQueue::advance_to`]; tests advance it by hand.
//! Fired timers come back as plain [`TimerHandle`]s which the owner compares
//! against the handle it is waiting for, so a cancelled or superseded timer can
//! never reach stale state.

use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// Timer capability consumed by the animated components.
pub trait Scheduler {
    /// Schedules a one-shot timer that fires after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Cancels a pending timer. Returns false if it already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Deadline-ordered queue of pending one-shot timers.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    /// Keyed by (deadline, id) so equal deadlines fire in scheduling order.
    pending: BTreeMap<(Duration, u64), TimerHandle>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position on the virtual time axis.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.values().any(|h| *h == handle)
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Time left until the earliest pending deadline.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Moves time forward to `elapsed` and returns every timer that became due.
    ///
    /// Time never moves backward; an older `elapsed` only drains timers that
    /// are already due.
    pub fn advance_to(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        self.now = self.now.max(elapsed);

        let mut fired = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            fired.push(entry.remove());
        }
        fired
    }

    /// Convenience for tests and fixed-step drivers.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<TimerHandle> {
        self.advance_to(self.now + delta)
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let handle = TimerHandle(id);
        self.pending.insert((self.now + delay, id), handle);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self
            .pending
            .iter()
            .find_map(|(key, h)| (*h == handle).then_some(*key));
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        let slow = timers.schedule_once(ms(90));
        let fast = timers.schedule_once(ms(40));

        assert_eq!(timers.advance_to(ms(100)), vec![fast, slow]);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn test_equal_deadlines_fire_in_scheduling_order() {
        let mut timers = TimerQueue::new();
        let first = timers.schedule_once(ms(10));
        let second = timers.schedule_once(ms(10));

        assert_eq!(timers.advance_by(ms(10)), vec![first, second]);
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule_once(ms(90));

        assert!(timers.advance_to(ms(89)).is_empty());
        assert_eq!(timers.time_until_next(), Some(ms(1)));
        assert_eq!(timers.advance_to(ms(90)), vec![handle]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule_once(ms(10));

        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.advance_by(ms(100)).is_empty());
    }

    #[test]
    fn test_time_never_moves_backward() {
        let mut timers = TimerQueue::new();
        timers.advance_to(ms(500));
        timers.advance_to(ms(100));
        assert_eq!(timers.now(), ms(500));

        // Deadlines are relative to the current position.
        timers.schedule_once(ms(10));
        assert_eq!(timers.next_deadline(), Some(ms(510)));
    }
}
