//! Application state composition.
//!
//! ```text
//! AppState
//! ├── profile: Profile          (page content)
//! ├── page: PageState           (terminal size, scroll, section spans)
//! ├── reveal: RevealState       (per-section visibility)
//! ├── hero: HeroState           (typewriter)
//! ├── contact: ContactForm      (form fields, submission, notice)
//! ├── flash: NoticeSlot         (hint bar notice)
//! ├── timers: TimerQueue        (every one-shot timer of the page)
//! └── tasks: TaskSeq            (async task id generator)
//! ```
//!
//! Only the reducer mutates this; the renderer reads it.

use anyhow::Result;
use chrono::Datelike;
use enum_map::EnumMap;
use folio_core::config::Config;
use folio_core::motion::{LineSpan, Threshold, TimerQueue};
use folio_core::profile::{Profile, Section};
use tokio_util::sync::CancellationToken;

use crate::common::{NoticeSlot, TaskSeq};
use crate::contact::ContactForm;
use crate::hero::HeroState;
use crate::page::layout::{self, PageLayout, PageView};
use crate::page::{RevealState, ScrollState};

/// Scroll position and the geometry it depends on.
#[derive(Debug)]
pub struct PageState {
    /// Terminal size (width, height) from the last Frame event.
    pub size: (u16, u16),
    pub scroll: ScrollState,
    /// Where each section sits in the last layout.
    pub spans: EnumMap<Section, LineSpan>,
    /// Section highlighted in the nav bar.
    pub active: Section,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            size: (0, 0),
            scroll: ScrollState::default(),
            spans: EnumMap::default(),
            active: Section::Hero,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub profile: Profile,
    pub page: PageState,
    pub reveal: RevealState,
    pub hero: HeroState,
    pub contact: ContactForm,
    pub flash: NoticeSlot,
    pub timers: TimerQueue,
    pub tasks: TaskSeq,
    /// Year shown in the footer.
    pub year: i32,
    pub should_quit: bool,
}

impl AppState {
    /// Builds the page state and starts the typewriter.
    ///
    /// # Errors
    /// Returns an error if the configuration violates a motion or content precondition.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let motion = &config.motion;

        let mut thresholds: EnumMap<Section, Threshold> = EnumMap::default();
        for section in Section::ALL {
            thresholds[section] = motion.threshold_for(section)?;
        }

        let mut timers = TimerQueue::new();
        let mut hero = HeroState::new(
            config.profile.phrases()?,
            motion.typing_timing()?,
            motion.typewriter,
        );
        hero.start(&mut timers);

        tracing::debug!(
            reveal = motion.reveal,
            typewriter = motion.typewriter,
            "page state created"
        );

        Ok(Self {
            profile: config.profile.clone(),
            page: PageState::default(),
            reveal: RevealState::new(motion.reveal, &thresholds),
            hero,
            contact: ContactForm::default(),
            flash: NoticeSlot::default(),
            timers,
            tasks: TaskSeq::default(),
            year: chrono::Local::now().year(),
            should_quit: false,
        })
    }

    pub fn view(&self) -> PageView<'_> {
        PageView {
            profile: &self.profile,
            revealed: self.reveal.visibility(),
            typed: self.hero.display_text(),
            show_cursor: self.hero.is_animated(),
            contact: &self.contact,
            year: self.year,
        }
    }

    /// Lays the page out for the current terminal width.
    pub fn layout(&self) -> PageLayout {
        layout::build(&self.view(), layout::content_width(self.page.size.0))
    }

    pub fn viewport_height(&self) -> usize {
        layout::viewport_height(self.page.size.1)
    }

    /// Stops every animation and drops every subscription and timer.
    ///
    /// Returns the token of an in-flight contact delivery for the runtime to
    /// cancel.
    pub fn teardown(&mut self) -> Option<CancellationToken> {
        self.hero.stop(&mut self.timers);
        self.reveal.release_all();
        self.contact.notice.clear(&mut self.timers);
        self.flash.clear(&mut self.timers);
        self.contact.submission.take_cancel()
    }
}
