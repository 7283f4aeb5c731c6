//! Interactive page handler.

use anyhow::{Context, Result};
use folio_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    folio_tui::run_portfolio(config).context("interactive page failed")
}
