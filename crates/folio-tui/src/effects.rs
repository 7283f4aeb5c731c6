//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They cover I/O and task spawning only; the reducer never performs either.
//!
//! Cancellation is decided by the reducer (`UiEffect::CancelTask`) and carried
//! out by the runtime calling `token.cancel()`.

use folio_core::contact::ContactSubmission;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Open a URL, `mailto:` link or local file with the system handler.
    OpenLink { target: String },

    /// Put text on the system clipboard.
    CopyToClipboard { text: String },

    /// Simulate delivery of a contact message in the background.
    SubmitContact {
        task: TaskId,
        submission: ContactSubmission,
        cancel: CancellationToken,
    },

    /// Cancel an in-flight task.
    CancelTask { token: Option<CancellationToken> },
}
