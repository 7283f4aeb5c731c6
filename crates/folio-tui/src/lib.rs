//! Full-screen terminal portfolio page.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use chrono::Datelike;
use enum_map::EnumMap;
pub use features::{contact, hero, page};
use folio_core::config::Config;
pub use runtime::TuiRuntime;

use crate::contact::ContactForm;
use crate::page::{PageView, build};

/// Runs the interactive page until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal, the configuration is invalid
/// or terminal I/O fails.
pub fn run_portfolio(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive page requires a terminal.\n\
             Use `folio print` to write the page as plain text."
        );
    }

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()
}

/// Lays the whole page out as plain text, every section revealed and the
/// first typewriter phrase shown.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn render_plain(config: &Config, width: usize) -> Result<String> {
    config.validate()?;
    let profile = &config.profile;
    let phrases = profile.phrases()?;
    let contact = ContactForm::default();
    let view = PageView {
        profile,
        revealed: EnumMap::from_fn(|_| true),
        typed: phrases.get(0),
        show_cursor: false,
        contact: &contact,
        year: chrono::Local::now().year(),
    };
    Ok(build(&view, width).to_plain_text())
}
