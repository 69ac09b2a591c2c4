//! Contact inquiry workflow service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_database::repositories::admin::AdminRepository;
use studio_database::repositories::contact::{
    BulkContactUpdate, ContactFilter, ContactRepository,
};
use studio_entity::contact::{
    Contact, ContactNote, ContactPriority, ContactStatus, ContactSubject, CreateContact,
    UpdateContact,
};

use crate::context::RequestContext;
use crate::report::aggregate::{self, ContactOverview};

/// Handles inquiry intake, triage, and the read/replied audit trail.
#[derive(Debug, Clone)]
pub struct ContactService {
    /// Contact repository.
    contact_repo: Arc<ContactRepository>,
    /// Staff repository (assignment checks).
    admin_repo: Arc<AdminRepository>,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(contact_repo: Arc<ContactRepository>, admin_repo: Arc<AdminRepository>) -> Self {
        Self {
            contact_repo,
            admin_repo,
        }
    }

    /// Creates an inquiry from the public contact form.
    ///
    /// Priority is derived once from the text. When the submitter is an
    /// authenticated staff member (staff-entered inquiry), the record is
    /// immediately marked read by them — it needs no triage.
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        subject: ContactSubject,
        message: String,
        submitted_by: Option<&RequestContext>,
    ) -> AppResult<Contact> {
        let priority = ContactPriority::from_text(subject.as_str(), &message);
        let data = CreateContact {
            name,
            email,
            phone,
            subject,
            message,
            priority,
        };

        let contact = self.contact_repo.create(&data).await?;
        info!(contact_id = %contact.id, priority = %contact.priority, "Contact created");

        if let Some(ctx) = submitted_by {
            return self.contact_repo.mark_read(contact.id, ctx.admin_id).await;
        }

        Ok(contact)
    }

    /// Lists inquiries matching the filter.
    pub async fn list(
        &self,
        filter: &ContactFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Contact>> {
        self.contact_repo.list(filter, page).await
    }

    /// Loads an inquiry with its notes, marking it read on first view.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> AppResult<(Contact, Vec<ContactNote>)> {
        let contact = self
            .contact_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))?;

        let contact = if contact.is_read {
            contact
        } else {
            self.contact_repo.mark_read(id, ctx.admin_id).await?
        };

        let notes = self.contact_repo.notes(id).await?;
        Ok((contact, notes))
    }

    /// Applies a staff triage edit.
    pub async fn update(&self, id: Uuid, data: UpdateContact) -> AppResult<Contact> {
        if let Some(admin_id) = data.assigned_to {
            self.admin_repo
                .find_by_id(admin_id)
                .await?
                .ok_or_else(|| AppError::not_found("Admin not found"))?;
        }
        self.contact_repo.update(id, &data).await
    }

    /// Marks an inquiry read (explicit action).
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Contact> {
        self.ensure_exists(id).await?;
        self.contact_repo.mark_read(id, ctx.admin_id).await
    }

    /// Marks an inquiry replied.
    pub async fn mark_replied(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Contact> {
        self.ensure_exists(id).await?;
        self.contact_repo.mark_replied(id, ctx.admin_id).await
    }

    /// Tags an inquiry as spam.
    pub async fn mark_spam(&self, id: Uuid) -> AppResult<Contact> {
        self.ensure_exists(id).await?;
        self.contact_repo.set_status(id, ContactStatus::Spam).await
    }

    /// Assigns an inquiry to a staff account.
    pub async fn assign(&self, id: Uuid, admin_id: Uuid) -> AppResult<Contact> {
        self.admin_repo
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        self.ensure_exists(id).await?;
        self.contact_repo.assign(id, admin_id).await
    }

    /// Appends a staff note to an inquiry.
    pub async fn add_note(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        content: &str,
    ) -> AppResult<ContactNote> {
        self.ensure_exists(id).await?;
        self.contact_repo.add_note(id, ctx.admin_id, content).await
    }

    /// Loads the newest unread inquiries.
    pub async fn unread(&self) -> AppResult<Vec<Contact>> {
        self.contact_repo.unread(10).await
    }

    /// Applies the same triage fields to a batch of inquiries.
    pub async fn bulk_update(
        &self,
        ids: &[Uuid],
        data: &BulkContactUpdate,
    ) -> AppResult<u64> {
        if ids.is_empty() {
            return Err(AppError::validation("Contact IDs are required"));
        }
        let touched = self.contact_repo.bulk_update(ids, data).await?;
        info!(count = touched, "Bulk contact update applied");
        Ok(touched)
    }

    /// Deletes an inquiry outright.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.contact_repo.delete(id).await? {
            return Err(AppError::not_found("Contact not found"));
        }
        Ok(())
    }

    /// Computes the inquiry statistics overview from a full snapshot.
    pub async fn stats(&self) -> AppResult<ContactOverview> {
        let contacts = self.contact_repo.snapshot().await?;
        Ok(aggregate::contact_overview(&contacts, Utc::now()))
    }

    async fn ensure_exists(&self, id: Uuid) -> AppResult<()> {
        self.contact_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))?;
        Ok(())
    }
}
