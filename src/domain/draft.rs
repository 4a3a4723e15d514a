//! Draft - In-progress email content

use serde::{Deserialize, Serialize};

/// Editable field of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    To,
    Subject,
    Body,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::To => "To",
            DraftField::Subject => "Subject",
            DraftField::Body => "Body",
        }
    }

    /// Whether a submit is refused while this field is empty
    pub fn is_required(&self) -> bool {
        matches!(self, DraftField::To | DraftField::Subject)
    }
}

/// The unsent email owned by a composer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Draft {
    /// Get a field value
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::To => &self.to,
            DraftField::Subject => &self.subject,
            DraftField::Body => &self.body,
        }
    }

    /// Replace a field value
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::To => self.to = value,
            DraftField::Subject => self.subject = value,
            DraftField::Body => self.body = value,
        }
    }

    /// Required fields that are currently empty, in form order
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [DraftField::To, DraftField::Subject, DraftField::Body]
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }

    /// Snapshot the draft as the payload handed to a sender
    pub fn to_email(&self) -> OutgoingEmail {
        OutgoingEmail {
            to: self.to.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}

/// Email payload passed to a [`MailSender`](crate::compose::sender::MailSender)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}
