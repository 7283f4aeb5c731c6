//! Hero slice: the typewriter line and the hero block.

mod render;

pub use render::render_hero;

use folio_core::motion::{PhraseList, Scheduler, TimerHandle, TypewriterRotator, TypingTiming};

/// Typewriter state of the hero.
///
/// With animation off the first phrase is shown in full and no timer is ever
/// scheduled.
#[derive(Debug)]
pub struct HeroState {
    rotator: TypewriterRotator,
    animate: bool,
}

impl HeroState {
    pub fn new(phrases: PhraseList, timing: TypingTiming, animate: bool) -> Self {
        Self {
            rotator: TypewriterRotator::new(phrases, timing),
            animate,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animate
    }

    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        if self.animate {
            self.rotator.start(scheduler);
        }
    }

    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        self.rotator.stop(scheduler);
    }

    pub fn on_timer(&mut self, handle: TimerHandle, scheduler: &mut dyn Scheduler) -> bool {
        self.rotator.on_timer(handle, scheduler)
    }

    pub fn is_running(&self) -> bool {
        self.rotator.is_running()
    }

    pub fn display_text(&self) -> &str {
        if self.animate {
            self.rotator.display_text()
        } else {
            self.rotator.phrases().get(0)
        }
    }
}
