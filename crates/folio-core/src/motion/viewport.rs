//! Line-based intersection observer for a scrolling terminal page.
//!
//! The page is one tall column of lines. Each region is a span of those lines
//! and the viewport is the span currently on screen. Ratios are recomputed
//! whenever either side changes; only subscriptions whose ratio moved are
//! reported, like the browser's intersection observer.

use std::collections::{BTreeMap, HashMap};

use super::Threshold;
use super::reveal::{IntersectionEntry, RegionId, SubscriptionId, VisibilityObserver};

/// A half-open range of page lines: `top..top + height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSpan {
    pub top: usize,
    pub height: usize,
}

impl LineSpan {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    fn overlap(&self, other: &LineSpan) -> usize {
        let start = self.top.max(other.top);
        let end = self.bottom().min(other.bottom());
        end.saturating_sub(start)
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.top && line < self.bottom()
    }

    /// Fraction of `self` that lies inside `viewport`.
    pub fn ratio_within(&self, viewport: &LineSpan) -> f32 {
        if self.height == 0 {
            return if viewport.contains(self.top) {
                1.0
            } else {
                0.0
            };
        }
        (self.overlap(viewport) as f32 / self.height as f32).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
struct Subscription {
    region: RegionId,
    threshold: Threshold,
    last_reported: Option<f32>,
}

/// Concrete [`VisibilityObserver`] over page line spans.
#[derive(Debug, Default)]
pub struct ViewportObserver {
    regions: HashMap<RegionId, LineSpan>,
    subscriptions: BTreeMap<SubscriptionId, Subscription>,
    viewport: LineSpan,
    next_id: u64,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or moves a region (called by the layout pass).
    pub fn set_region(&mut self, region: RegionId, span: LineSpan) {
        self.regions.insert(region, span);
    }

    /// Forgets a region. Subscriptions stay but stop reporting until it returns.
    pub fn remove_region(&mut self, region: RegionId) {
        self.regions.remove(&region);
    }

    pub fn region(&self, region: RegionId) -> Option<LineSpan> {
        self.regions.get(&region).copied()
    }

    pub fn set_viewport(&mut self, top: usize, height: usize) {
        self.viewport = LineSpan::new(top, height);
    }

    pub fn viewport(&self) -> LineSpan {
        self.viewport
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Threshold a subscription was registered with.
    pub fn threshold_of(&self, subscription: SubscriptionId) -> Option<Threshold> {
        self.subscriptions.get(&subscription).map(|s| s.threshold)
    }

    /// Current ratio of a region, if it is laid out.
    pub fn ratio(&self, region: RegionId) -> Option<f32> {
        self.regions
            .get(&region)
            .map(|span| span.ratio_within(&self.viewport))
    }

    /// Collects notifications for every subscription whose ratio changed since
    /// it was last reported. The first report after subscribing is always sent.
    pub fn take_entries(&mut self) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for (id, subscription) in &mut self.subscriptions {
            let Some(span) = self.regions.get(&subscription.region) else {
                continue;
            };
            let ratio = span.ratio_within(&self.viewport);
            if subscription.last_reported == Some(ratio) {
                continue;
            }
            subscription.last_reported = Some(ratio);
            entries.push(IntersectionEntry {
                subscription: *id,
                ratio,
            });
        }
        entries
    }
}

impl VisibilityObserver for ViewportObserver {
    fn subscribe(&mut self, region: RegionId, threshold: Threshold) -> Option<SubscriptionId> {
        if !self.regions.contains_key(&region) {
            return None;
        }
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.subscriptions.insert(
            id,
            Subscription {
                region,
                threshold,
                last_reported: None,
            },
        );
        tracing::trace!(region = region.0, subscription = id.raw(), "subscribed");
        Some(id)
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        if self.subscriptions.remove(&subscription).is_some() {
            tracing::trace!(subscription = subscription.raw(), "unsubscribed");
        }
    }
}
