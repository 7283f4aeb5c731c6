//! Contact form validation.
//!
//! The form only simulates delivery: a valid draft becomes a
//! [`ContactSubmission`] that is acknowledged and dropped. Nothing is stored or
//! transmitted.

use std::fmt;

/// Notice shown when a field is left empty.
pub const MISSING_FIELDS_NOTICE: &str = "Please fill all fields.";

/// Notice shown after a (simulated) successful submission.
pub const SENT_NOTICE: &str = "Message saved locally (demo). Thank you — I will respond soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingFields(Vec<ContactField>),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields(_) => f.write_str(MISSING_FIELDS_NOTICE),
        }
    }
}

impl std::error::Error for ContactError {}

/// Raw form contents as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Fields with no text at all. Whitespace counts as text.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    /// Turns the draft into a submission.
    ///
    /// # Errors
    /// Returns [`ContactError::MissingFields`] if any field is empty.
    pub fn submit(&self) -> Result<ContactSubmission, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

/// A validated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Size summary for logs. Contents are never logged.
    pub fn summary(&self) -> String {
        format!(
            "name={}c email={}c message={}c",
            self.name.chars().count(),
            self.email.chars().count(),
            self.message.chars().count()
        )
    }
}
