//! Contact inquiry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::priority::ContactPriority;
use super::status::ContactStatus;
use super::subject::ContactSubject;

/// An inbound inquiry from the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    /// Unique inquiry identifier.
    pub id: Uuid,
    /// Sender full name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Sender phone number.
    pub phone: Option<String>,
    /// Subject category.
    pub subject: ContactSubject,
    /// Message body.
    pub message: String,
    /// Triage priority, derived once at creation.
    pub priority: ContactPriority,
    /// Workflow status.
    pub status: ContactStatus,
    /// Staff account the inquiry is assigned to.
    pub assigned_to: Option<Uuid>,
    /// Whether any staff member has seen the inquiry.
    pub is_read: bool,
    /// Who first marked the inquiry read.
    pub read_by: Option<Uuid>,
    /// When the inquiry was marked read.
    pub read_at: Option<DateTime<Utc>>,
    /// Who marked the inquiry replied.
    pub replied_by: Option<Uuid>,
    /// When the inquiry was marked replied.
    pub replied_at: Option<DateTime<Utc>>,
    /// When the inquiry was submitted.
    pub created_at: DateTime<Utc>,
    /// When the inquiry was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Apply the mark-as-read transition in memory.
    ///
    /// Idempotent: a second call keeps status `read` and overwrites the
    /// audit fields with the latest reader. Replied/closed inquiries keep
    /// their status but still record the read audit.
    pub fn apply_read(&mut self, reader: Uuid, at: DateTime<Utc>) {
        self.is_read = true;
        self.read_by = Some(reader);
        self.read_at = Some(at);
        if self.status == ContactStatus::New {
            self.status = ContactStatus::Read;
        }
        self.updated_at = at;
    }

    /// Apply the mark-as-replied transition in memory.
    pub fn apply_replied(&mut self, responder: Uuid, at: DateTime<Utc>) {
        if !self.is_read {
            self.apply_read(responder, at);
        }
        self.status = ContactStatus::Replied;
        self.replied_by = Some(responder);
        self.replied_at = Some(at);
        self.updated_at = at;
    }
}

/// An append-only staff note attached to an inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactNote {
    /// Unique note identifier.
    pub id: Uuid,
    /// The inquiry this note belongs to.
    pub contact_id: Uuid,
    /// The staff account that wrote the note.
    pub author_id: Uuid,
    /// Note body.
    pub content: String,
    /// When the note was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
    /// Derived at creation via [`ContactPriority::from_text`].
    pub priority: ContactPriority,
}

/// Data for a staff edit of an existing inquiry.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContact {
    pub status: Option<ContactStatus>,
    pub priority: Option<ContactPriority>,
    pub assigned_to: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact {
            id: Uuid::new_v4(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            phone: None,
            subject: ContactSubject::General,
            message: "Hello".to_string(),
            priority: ContactPriority::Medium,
            status: ContactStatus::New,
            assigned_to: None,
            is_read: false,
            read_by: None,
            read_at: None,
            replied_by: None,
            replied_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut c = contact();
        let reader = Uuid::new_v4();
        let first = Utc::now();
        c.apply_read(reader, first);
        assert_eq!(c.status, ContactStatus::Read);
        assert_eq!(c.read_by, Some(reader));

        let second_reader = Uuid::new_v4();
        let second = Utc::now();
        c.apply_read(second_reader, second);
        // Status stays read; audit fields reflect the latest reader.
        assert_eq!(c.status, ContactStatus::Read);
        assert_eq!(c.read_by, Some(second_reader));
        assert_eq!(c.read_at, Some(second));
    }

    #[test]
    fn test_read_does_not_revert_replied() {
        let mut c = contact();
        let staff = Uuid::new_v4();
        c.apply_replied(staff, Utc::now());
        assert_eq!(c.status, ContactStatus::Replied);

        c.apply_read(staff, Utc::now());
        assert_eq!(c.status, ContactStatus::Replied);
    }

    #[test]
    fn test_replied_implies_read() {
        let mut c = contact();
        let staff = Uuid::new_v4();
        c.apply_replied(staff, Utc::now());
        assert!(c.is_read);
        assert_eq!(c.read_by, Some(staff));
        assert_eq!(c.replied_by, Some(staff));
    }
}
