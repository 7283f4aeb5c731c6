use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::contact::SENT_NOTICE;
use folio_core::motion::{Scheduler, TimerHandle};
use tokio_util::sync::CancellationToken;

use super::state::{ContactForm, FormFocus};
use crate::common::{NoticeKind, TaskId, TaskSeq};
use crate::effects::UiEffect;

/// Handles a key while the form has focus.
pub fn handle_key(
    form: &mut ContactForm,
    key: KeyEvent,
    seq: &mut TaskSeq,
    scheduler: &mut dyn Scheduler,
) -> Vec<UiEffect> {
    let Some(focus) = form.focus else {
        return vec![];
    };

    match key.code {
        KeyCode::Esc => {
            form.focus = None;
            vec![]
        }
        KeyCode::Tab => {
            form.focus = Some(focus.next());
            vec![]
        }
        KeyCode::BackTab => {
            form.focus = Some(focus.prev());
            vec![]
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            submit(form, seq, scheduler)
        }
        KeyCode::Enter => match focus {
            FormFocus::Send => submit(form, seq, scheduler),
            FormFocus::Reset => reset(form, scheduler),
            FormFocus::Field(field) => {
                if !form.field_mut(field).input(key) {
                    form.focus = Some(focus.next());
                }
                vec![]
            }
        },
        _ => {
            if let FormFocus::Field(field) = focus {
                form.field_mut(field).input(key);
            }
            vec![]
        }
    }
}

/// Validates the draft and starts the simulated delivery.
///
/// Blank fields show the missing-fields notice and send nothing. A second
/// submit while one is in flight is ignored.
pub fn submit(
    form: &mut ContactForm,
    seq: &mut TaskSeq,
    scheduler: &mut dyn Scheduler,
) -> Vec<UiEffect> {
    if form.is_sending() {
        return vec![];
    }

    match form.draft().submit() {
        Err(err) => {
            tracing::debug!(%err, "contact form rejected");
            form.notice.show(err.to_string(), NoticeKind::Error, scheduler);
            vec![]
        }
        Ok(submission) => {
            let task = seq.next_id();
            let cancel = CancellationToken::new();
            form.submission.on_started(task, cancel.clone());
            form.notice.clear(scheduler);
            tracing::info!(task = task.0, summary = %submission.summary(), "contact submission started");
            vec![UiEffect::SubmitContact {
                task,
                submission,
                cancel,
            }]
        }
    }
}

/// Clears every field and cancels an in-flight delivery.
pub fn reset(form: &mut ContactForm, scheduler: &mut dyn Scheduler) -> Vec<UiEffect> {
    form.clear_fields();
    form.notice.clear(scheduler);
    if form.focus.is_some() {
        form.focus = Some(FormFocus::Field(folio_core::contact::ContactField::Name));
    }
    match form.submission.take_cancel() {
        Some(token) => {
            tracing::info!("contact submission cancelled by reset");
            vec![UiEffect::CancelTask { token: Some(token) }]
        }
        None => vec![],
    }
}

/// Delivery finished. Results for anything but the active task are dropped.
pub fn on_delivered(form: &mut ContactForm, task: TaskId, scheduler: &mut dyn Scheduler) {
    if !form.submission.finish_if_active(task) {
        tracing::debug!(task = task.0, "stale contact delivery ignored");
        return;
    }
    form.clear_fields();
    form.notice.show(SENT_NOTICE, NoticeKind::Info, scheduler);
}

pub fn on_cancelled(form: &mut ContactForm, task: TaskId) {
    // Reset already cleared the task; this only matters if the runtime
    // cancelled on its own.
    form.submission.finish_if_active(task);
}

/// Routes a fired timer to the form's notice.
pub fn on_timer(form: &mut ContactForm, handle: TimerHandle) -> bool {
    form.notice.on_timer(handle)
}
