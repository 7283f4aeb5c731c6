//! Contact slice: form state, key handling and form rendering.

mod render;
mod state;
mod update;

pub use render::render_form;
pub use state::{ContactForm, FormFocus};
pub use update::{handle_key, on_cancelled, on_delivered, on_timer, reset, submit};
