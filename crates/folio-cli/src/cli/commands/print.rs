//! Plain-text rendering of the page.

use std::io::{self, Write};

use anyhow::{Context, Result};
use folio_core::config::Config;

/// Column width used when `--width` is not given.
pub const DEFAULT_WIDTH: usize = 80;

pub fn run(config: &Config, width: usize) -> Result<()> {
    let text = folio_tui::render_plain(config, width)?;
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("write page to stdout")?;
    tracing::debug!(width, lines = text.lines().count(), "page printed");
    Ok(())
}
