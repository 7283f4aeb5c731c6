//! Visibility-triggered reveal.
//!
//! A [`VisibilityRevealer`] turns intersection notifications for one region
//! into a single `is_visible` flag. The presentation layer picks between the
//! hidden and shown styles from that flag; the transition itself is not
//! modelled here.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──observe──▶ Pending (region not laid out yet, retried on next observe)
//!   │                  │
//!   │                  └──observe──▶ Active(subscription)
//!   └──observe(None)──▶ Unobserved (always visible)
//!
//! any ──release──▶ Released (terminal, ignores everything)
//! ```

use super::Threshold;

/// Identifies a renderable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(pub u32);

/// Handle returned by [`VisibilityObserver::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// One intersection-change notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub subscription: SubscriptionId,
    /// Fraction of the region currently inside the viewport (0.0..=1.0).
    pub ratio: f32,
}

/// Region-visibility observation capability.
pub trait VisibilityObserver {
    /// Starts observing `region`. Returns `None` while the region is unknown.
    fn subscribe(&mut self, region: RegionId, threshold: Threshold) -> Option<SubscriptionId>;

    /// Stops observing. Unknown or already released handles are ignored.
    fn unsubscribe(&mut self, subscription: SubscriptionId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observation {
    Idle,
    Pending,
    Active(SubscriptionId),
    Unobserved,
    Released,
}

/// Per-section visibility state.
#[derive(Debug, Clone)]
pub struct VisibilityRevealer {
    region: RegionId,
    threshold: Threshold,
    visible: bool,
    observation: Observation,
}

impl VisibilityRevealer {
    pub fn new(region: RegionId, threshold: Threshold) -> Self {
        Self {
            region,
            threshold,
            visible: false,
            observation: Observation::Idle,
        }
    }

    pub fn region(&self) -> RegionId {
        self.region
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The live subscription, if observation is active.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        match self.observation {
            Observation::Active(id) => Some(id),
            _ => None,
        }
    }

    /// True while `observe` is waiting for the region to become available.
    pub fn is_pending(&self) -> bool {
        matches!(self.observation, Observation::Idle | Observation::Pending)
    }

    pub fn is_released(&self) -> bool {
        matches!(self.observation, Observation::Released)
    }

    /// Begins monitoring the region.
    ///
    /// Safe to call repeatedly: an active subscription is returned as is, and a
    /// pending one retries the subscribe. Without an observer the region is
    /// treated as permanently visible.
    pub fn observe(
        &mut self,
        observer: Option<&mut dyn VisibilityObserver>,
    ) -> Option<SubscriptionId> {
        match self.observation {
            Observation::Released => return None,
            Observation::Active(id) => return Some(id),
            Observation::Idle | Observation::Pending | Observation::Unobserved => {}
        }

        let Some(observer) = observer else {
            self.observation = Observation::Unobserved;
            self.visible = true;
            return None;
        };

        match observer.subscribe(self.region, self.threshold) {
            Some(id) => {
                self.observation = Observation::Active(id);
                Some(id)
            }
            None => {
                self.observation = Observation::Pending;
                None
            }
        }
    }

    /// Applies an intersection notification.
    ///
    /// Entries for other subscriptions (including ones released earlier) are
    /// ignored. Returns true if `is_visible` changed.
    pub fn on_intersection(&mut self, entry: &IntersectionEntry) -> bool {
        if self.subscription() != Some(entry.subscription) {
            return false;
        }
        let visible = self.threshold.is_met_by(entry.ratio);
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    /// Changes the threshold, re-subscribing if observation is active.
    pub fn set_threshold(&mut self, threshold: Threshold, observer: &mut dyn VisibilityObserver) {
        if threshold == self.threshold || self.is_released() {
            return;
        }
        self.threshold = threshold;

        if let Observation::Active(id) = self.observation {
            observer.unsubscribe(id);
            self.observation = Observation::Pending;
            self.observe(Some(observer));
        }
    }

    /// Releases the subscription. Idempotent; after this nothing mutates the
    /// revealer.
    pub fn release(&mut self, observer: &mut dyn VisibilityObserver) {
        if let Observation::Active(id) = self.observation {
            observer.unsubscribe(id);
        }
        self.observation = Observation::Released;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    /// Observer fake that delivers synthetic intersection events.
    #[derive(Default)]
    struct FakeObserver {
        available: HashSet<RegionId>,
        next: u64,
        live: HashMap<SubscriptionId, RegionId>,
        unsubscribed: Vec<SubscriptionId>,
    }

    impl FakeObserver {
        fn with_region(region: RegionId) -> Self {
            let mut fake = Self::default();
            fake.available.insert(region);
            fake
        }

        fn entry(&self, region: RegionId, ratio: f32) -> Vec<IntersectionEntry> {
            self.live
                .iter()
                .filter(|(_, r)| **r == region)
                .map(|(id, _)| IntersectionEntry {
                    subscription: *id,
                    ratio,
                })
                .collect()
        }
    }

    impl VisibilityObserver for FakeObserver {
        fn subscribe(&mut self, region: RegionId, _threshold: Threshold) -> Option<SubscriptionId> {
            if !self.available.contains(&region) {
                return None;
            }
            let id = SubscriptionId::new(self.next);
            self.next += 1;
            self.live.insert(id, region);
            Some(id)
        }

        fn unsubscribe(&mut self, subscription: SubscriptionId) {
            if self.live.remove(&subscription).is_some() {
                self.unsubscribed.push(subscription);
            }
        }
    }

    const REGION: RegionId = RegionId(3);

    #[test]
    fn test_visible_iff_ratio_meets_threshold() {
        let mut observer = FakeObserver::with_region(REGION);
        let mut revealer = VisibilityRevealer::new(REGION, Threshold::DEFAULT);
        revealer.observe(Some(&mut observer));

        for (ratio, expected) in [(0.2, true), (0.0, false), (0.18, true), (0.17, false)] {
            for entry in observer.entry(REGION, ratio) {
                revealer.on_intersection(&entry);
            }
            assert_eq!(revealer.is_visible(), expected, "ratio {ratio}");
        }
    }

    #[test]
    fn test_scroll_in_and_out_with_default_threshold() {
        let mut observer = FakeObserver::with_region(REGION);
        let mut revealer = VisibilityRevealer::new(REGION, Threshold::default());
        revealer.observe(Some(&mut observer));
        assert!(!revealer.is_visible());

        let entries = observer.entry(REGION, 0.20);
        assert!(revealer.on_intersection(&entries[0]));
        assert!(revealer.is_visible());

        let entries = observer.entry(REGION, 0.0);
        assert!(revealer.on_intersection(&entries[0]));
        assert!(!revealer.is_visible());
    }

    #[test]
    fn test_observe_waits_for_region() {
        let mut observer = FakeObserver::default();
        let mut revealer = VisibilityRevealer::new(REGION, Threshold::DEFAULT);

        assert_eq!(revealer.observe(Some(&mut observer)), None);
        assert!(revealer.is_pending());

        observer.available.insert(REGION);
        let id = revealer.observe(Some(&mut observer));
        assert!(id.is_some());
        assert_eq!(revealer.subscription(), id);

        // Already active: no second subscription.
        assert_eq!(revealer.observe(Some(&mut observer)), id);
        assert_eq!(observer.live.len(), 1);
    }

    #[test]
    fn test_missing_observer_means_always_visible() {
        let mut revealer = VisibilityRevealer::new(REGION, Threshold::DEFAULT);
        assert_eq!(revealer.observe(None), None);
        assert!(revealer.is_visible());
    }

    #[test]
    fn test_no_mutation_after_release() {
        let mut observer = FakeObserver::with_region(REGION);
        let mut revealer = VisibilityRevealer::new(REGION, Threshold::DEFAULT);
        revealer.observe(Some(&mut observer));
        let stale = observer.entry(REGION, 1.0);

        revealer.release(&mut observer);

        // The region keeps intersecting but nothing reaches the revealer.
        assert!(!revealer.on_intersection(&stale[0]));
        assert!(!revealer.is_visible());
        assert!(observer.entry(REGION, 1.0).is_empty());
        assert_eq!(revealer.observe(Some(&mut observer)), None);
    }

    #[test]
    fn test_each_subscription_released_exactly_once() {
        let mut observer = FakeObserver::with_region(REGION);
        let mut revealer = VisibilityRevealer::new(REGION, Threshold::DEFAULT);
        revealer.observe(Some(&mut observer));

        revealer.set_threshold(Threshold::new(0.5).unwrap(), &mut observer);
        revealer.set_threshold(Threshold::new(0.7).unwrap(), &mut observer);
        revealer.release(&mut observer);
        revealer.release(&mut observer);

        assert_eq!(observer.unsubscribed.len(), 3);
        let unique: HashSet<_> = observer.unsubscribed.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(observer.live.is_empty());
    }

    #[test]
    fn test_threshold_change_ignores_old_subscription() {
        let mut observer = FakeObserver::with_region(REGION);
        let mut revealer = VisibilityRevealer::new(REGION, Threshold::DEFAULT);
        let old = revealer.observe(Some(&mut observer)).unwrap();

        revealer.set_threshold(Threshold::new(0.5).unwrap(), &mut observer);

        let stale = IntersectionEntry {
            subscription: old,
            ratio: 1.0,
        };
        assert!(!revealer.on_intersection(&stale));
        assert!(!revealer.is_visible());

        let fresh = observer.entry(REGION, 0.6);
        revealer.on_intersection(&fresh[0]);
        assert!(revealer.is_visible());
    }
}
