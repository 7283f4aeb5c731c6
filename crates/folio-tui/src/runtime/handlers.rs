//! Effect handlers.
//!
//! Handlers perform I/O and never touch state. Async handlers return the
//! `UiEvent` the runtime sends back through the inbox.

use std::time::Duration;

use folio_core::contact::ContactSubmission;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;
use crate::events::UiEvent;

/// How long the simulated contact delivery takes.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(600);

/// Pretends to deliver a contact message.
///
/// Nothing leaves the machine; the submission is only logged by size.
pub async fn deliver_contact(
    task: TaskId,
    submission: ContactSubmission,
    cancel: CancellationToken,
) -> UiEvent {
    tokio::select! {
        () = cancel.cancelled() => {
            tracing::info!(task = task.0, "contact delivery cancelled");
            UiEvent::ContactCancelled { task }
        }
        () = tokio::time::sleep(SIMULATED_LATENCY) => {
            tracing::info!(task = task.0, summary = %submission.summary(), "contact message delivered");
            UiEvent::ContactDelivered { task }
        }
    }
}

/// Opens a URL, `mailto:` link or file with the system handler.
pub fn open_link(target: &str) -> Option<UiEvent> {
    match open::that_detached(target) {
        Ok(()) => {
            tracing::debug!(target, "opened link");
            None
        }
        Err(err) => {
            tracing::warn!(target, %err, "failed to open link");
            Some(UiEvent::EffectFailed {
                message: format!("Could not open {target}: {err}"),
            })
        }
    }
}

/// Places `text` on the system clipboard.
///
/// The clipboard handle is kept by the caller: on X11 the contents vanish once
/// it is dropped.
pub fn copy_to_clipboard(clipboard: &mut Option<arboard::Clipboard>, text: &str) -> UiEvent {
    let result = match clipboard.take() {
        Some(handle) => Ok(handle),
        None => arboard::Clipboard::new(),
    }
    .and_then(|mut handle| {
        let result = handle.set_text(text);
        *clipboard = Some(handle);
        result
    });
    match result {
        Ok(()) => UiEvent::Copied,
        Err(err) => {
            tracing::warn!(%err, "clipboard unavailable");
            UiEvent::EffectFailed {
                message: format!("Clipboard unavailable: {err}"),
            }
        }
    }
}
