//! Scroll reveal and typewriter state machines.
//!
//! Both components consume injected capabilities instead of touching the
//! terminal directly:
//! - [`reveal::VisibilityObserver`] reports how much of a region is on screen
//! - [`timer::Scheduler`] schedules one-shot timers
//!
//! [`viewport::ViewportObserver`] and [`timer::TimerQueue`] are the concrete
//! implementations the TUI drives; tests substitute fakes.

pub mod reveal;
pub mod timer;
pub mod typewriter;
pub mod viewport;

use std::fmt;
use std::time::Duration;

pub use reveal::{
    IntersectionEntry, RegionId, SubscriptionId, VisibilityObserver, VisibilityRevealer,
};
pub use timer::{Scheduler, TimerHandle, TimerQueue};
pub use typewriter::{PhraseList, TypewriterRotator, TypingPhase, TypingState};
pub use viewport::{LineSpan, ViewportObserver};

/// Precondition violations detected when a motion component is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionConfigError {
    /// The typewriter needs at least one phrase.
    EmptyPhraseList,
    /// Thresholds are fractions of a region's area.
    ThresholdOutOfRange(f32),
    /// A typing, deleting or hold interval of zero.
    ZeroInterval(&'static str),
    /// Deleting has to run faster than typing.
    DeleteNotFaster { typing: Duration, deleting: Duration },
}

impl fmt::Display for MotionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionConfigError::EmptyPhraseList => {
                write!(f, "typewriter phrase list must contain at least one phrase")
            }
            MotionConfigError::ThresholdOutOfRange(value) => {
                write!(f, "reveal threshold {value} is outside 0.0..=1.0")
            }
            MotionConfigError::ZeroInterval(name) => {
                write!(f, "{name} interval must be greater than zero")
            }
            MotionConfigError::DeleteNotFaster { typing, deleting } => write!(
                f,
                "delete interval ({}ms) must be shorter than type interval ({}ms)",
                deleting.as_millis(),
                typing.as_millis()
            ),
        }
    }
}

impl std::error::Error for MotionConfigError {}

/// Fraction of a region that must be on screen before it counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.18);

    /// Validates a threshold fraction.
    ///
    /// # Errors
    /// Returns an error unless `value` is within `0.0..=1.0`.
    pub fn new(value: f32) -> Result<Self, MotionConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MotionConfigError::ThresholdOutOfRange(value))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Visible iff the intersected fraction reaches the threshold.
    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tick intervals of the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub hold: Duration,
}

impl TypingTiming {
    pub const DEFAULT_TYPE_MS: u64 = 90;
    pub const DEFAULT_DELETE_MS: u64 = 40;
    pub const DEFAULT_HOLD_MS: u64 = 1000;

    /// Validates a set of intervals.
    ///
    /// # Errors
    /// Returns an error if an interval is zero or deleting is not faster than typing.
    pub fn new(
        type_interval: Duration,
        delete_interval: Duration,
        hold: Duration,
    ) -> Result<Self, MotionConfigError> {
        if type_interval.is_zero() {
            return Err(MotionConfigError::ZeroInterval("type"));
        }
        if delete_interval.is_zero() {
            return Err(MotionConfigError::ZeroInterval("delete"));
        }
        if hold.is_zero() {
            return Err(MotionConfigError::ZeroInterval("hold"));
        }
        if delete_interval >= type_interval {
            return Err(MotionConfigError::DeleteNotFaster {
                typing: type_interval,
                deleting: delete_interval,
            });
        }
        Ok(Self {
            type_interval,
            delete_interval,
            hold,
        })
    }
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(Self::DEFAULT_TYPE_MS),
            delete_interval: Duration::from_millis(Self::DEFAULT_DELETE_MS),
            hold: Duration::from_millis(Self::DEFAULT_HOLD_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(
            Threshold::new(1.5),
            Err(MotionConfigError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f32::NAN).is_err());
    }

    #[test]
    fn test_threshold_is_met_for_all_ratios() {
        for t in 0..=20 {
            let threshold = Threshold::new(t as f32 / 20.0).unwrap();
            for r in 0..=20 {
                let ratio = r as f32 / 20.0;
                assert_eq!(threshold.is_met_by(ratio), ratio >= threshold.get());
            }
        }
    }

    #[test]
    fn test_default_timing_deletes_faster_than_it_types() {
        let timing = TypingTiming::default();
        assert!(timing.delete_interval < timing.type_interval);
        assert_eq!(timing.type_interval, Duration::from_millis(90));
        assert_eq!(timing.delete_interval, Duration::from_millis(40));
        assert_eq!(timing.hold, Duration::from_millis(1000));
    }

    #[test]
    fn test_timing_rejects_slow_delete() {
        let err = TypingTiming::new(
            Duration::from_millis(40),
            Duration::from_millis(90),
            Duration::from_millis(1000),
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be shorter"));
    }

    #[test]
    fn test_timing_rejects_zero_interval() {
        let err = TypingTiming::new(
            Duration::from_millis(90),
            Duration::from_millis(40),
            Duration::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, MotionConfigError::ZeroInterval("hold"));
    }
}
