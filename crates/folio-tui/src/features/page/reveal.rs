//! Scroll reveal for the page sections.
//!
//! Every section owns a [`VisibilityRevealer`] keyed to its own region. The
//! layout pass reports section spans and the scroll position; [`RevealState::sync`]
//! feeds them through the [`ViewportObserver`] and applies the resulting
//! intersection entries.

use enum_map::EnumMap;
use folio_core::motion::{LineSpan, RegionId, Threshold, ViewportObserver, VisibilityRevealer};
use folio_core::profile::Section;

#[derive(Debug)]
pub struct RevealState {
    observer: ViewportObserver,
    /// When false every section is always visible.
    enabled: bool,
    revealers: EnumMap<Section, VisibilityRevealer>,
}

pub fn region_of(section: Section) -> RegionId {
    RegionId(section as u32)
}

impl RevealState {
    pub fn new(enabled: bool, thresholds: &EnumMap<Section, Threshold>) -> Self {
        Self {
            observer: ViewportObserver::new(),
            enabled,
            revealers: EnumMap::from_fn(|section| {
                VisibilityRevealer::new(region_of(section), thresholds[section])
            }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.revealers[section].is_visible()
    }

    pub fn visibility(&self) -> EnumMap<Section, bool> {
        EnumMap::from_fn(|section| self.is_visible(section))
    }

    pub fn revealer(&self, section: Section) -> &VisibilityRevealer {
        &self.revealers[section]
    }

    /// Publishes the current layout and scroll position, retries pending
    /// subscriptions and applies every changed ratio. Returns true if any
    /// section changed visibility.
    pub fn sync(
        &mut self,
        spans: &EnumMap<Section, LineSpan>,
        viewport_top: usize,
        viewport_height: usize,
    ) -> bool {
        if !self.enabled {
            for revealer in self.revealers.values_mut() {
                revealer.observe(None);
            }
            return false;
        }

        for (section, span) in spans {
            self.observer.set_region(region_of(section), *span);
        }
        self.observer.set_viewport(viewport_top, viewport_height);

        for revealer in self.revealers.values_mut() {
            revealer.observe(Some(&mut self.observer));
        }

        let mut changed = false;
        for entry in self.observer.take_entries() {
            for (section, revealer) in &mut self.revealers {
                if revealer.on_intersection(&entry) {
                    tracing::debug!(
                        section = section.name(),
                        ratio = entry.ratio,
                        visible = revealer.is_visible(),
                        "section visibility changed"
                    );
                    changed = true;
                }
            }
        }
        changed
    }

    /// Releases every subscription. Nothing changes visibility afterwards.
    pub fn release_all(&mut self) {
        for revealer in self.revealers.values_mut() {
            revealer.release(&mut self.observer);
        }
    }

    #[cfg(test)]
    pub(crate) fn subscription_count(&self) -> usize {
        self.observer.subscription_count()
    }
}
