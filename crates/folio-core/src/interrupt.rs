//! Process-level interrupt flag.
//!
//! Ctrl+C while the terminal is in raw mode arrives as a key event, but a
//! SIGINT from outside (e.g. `kill -INT`) still lands here. The runtime polls
//! the flag once per loop iteration, tears the page down and fails with
//! [`InterruptedError`] so the binary exits 130.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static RESTORE_HOOK: OnceLock<Box<dyn Fn() + Send + Sync>> = OnceLock::new();

#[derive(Debug)]
pub struct InterruptedError;

impl std::fmt::Display for InterruptedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interrupted")
    }
}

impl std::error::Error for InterruptedError {}

/// Installs the Ctrl+C handler.
///
/// # Errors
/// Returns an error if a handler is already installed for this process.
pub fn init() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(trigger)
}

/// Sets the interrupt flag; a second interrupt restores the terminal and exits.
pub fn trigger() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        // process::exit() bypasses Drop, so restore explicitly.
        if let Some(hook) = RESTORE_HOOK.get() {
            hook();
        }
        std::process::exit(130);
    }
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Registers the hook run before a forced exit. Only the first call wins.
pub fn set_restore_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let _ = RESTORE_HOOK.set(Box::new(hook));
}
