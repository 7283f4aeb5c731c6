use folio_core::contact::{ContactDraft, ContactField};

use crate::common::{NoticeSlot, TaskState, TextField};

/// Focus ring of the form: the three fields, then the two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(ContactField),
    Send,
    Reset,
}

impl FormFocus {
    const RING: [FormFocus; 5] = [
        FormFocus::Field(ContactField::Name),
        FormFocus::Field(ContactField::Email),
        FormFocus::Field(ContactField::Message),
        FormFocus::Send,
        FormFocus::Reset,
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }
}

/// Contact form state.
#[derive(Debug)]
pub struct ContactForm {
    name: TextField,
    email: TextField,
    message: TextField,
    /// `None` while the page (not the form) has keyboard focus.
    pub focus: Option<FormFocus>,
    /// Simulated delivery in flight.
    pub submission: TaskState,
    pub notice: NoticeSlot,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: TextField::single_line(),
            email: TextField::single_line(),
            message: TextField::multi_line(),
            focus: None,
            submission: TaskState::default(),
            notice: NoticeSlot::default(),
        }
    }
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &TextField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut TextField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Field holding the keyboard cursor, if any.
    pub fn focused_field(&self) -> Option<ContactField> {
        match self.focus {
            Some(FormFocus::Field(field)) => Some(field),
            _ => None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    pub fn is_sending(&self) -> bool {
        self.submission.is_running()
    }

    pub fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.text().to_string(),
            email: self.email.text().to_string(),
            message: self.message.text().to_string(),
        }
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
