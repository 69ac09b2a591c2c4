//! Contact inquiry repository implementation.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use studio_core::error::{AppError, ErrorKind};
use studio_core::result::AppResult;
use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_entity::contact::{
    Contact, ContactNote, ContactPriority, ContactStatus, ContactSubject, CreateContact,
    UpdateContact,
};

/// Typed filter for inquiry listings.
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    /// Restrict to a single workflow status.
    pub status: Option<ContactStatus>,
    /// Restrict to a single priority.
    pub priority: Option<ContactPriority>,
    /// Restrict to a single subject category.
    pub subject: Option<ContactSubject>,
    /// Only inquiries no staff member has seen.
    pub unread_only: bool,
    /// Case-insensitive substring match over name/email/message.
    pub search: Option<String>,
}

/// Fields applied by a bulk update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BulkContactUpdate {
    pub status: Option<ContactStatus>,
    pub priority: Option<ContactPriority>,
    pub assigned_to: Option<Uuid>,
}

/// Repository for contact inquiry CRUD and workflow transitions.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Create a new contact repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an inquiry by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Contact>> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find contact by id", e)
            })
    }

    /// List inquiries matching the filter, newest first.
    pub async fn list(
        &self,
        filter: &ContactFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Contact>> {
        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM contacts WHERE 1=1");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count contacts", e)
            })?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM contacts WHERE 1=1");
        push_filters(&mut query, filter);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(page.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(page.offset() as i64);

        let contacts = query
            .build_query_as::<Contact>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list contacts", e))?;

        Ok(PageResponse::new(
            contacts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Load the newest unread inquiries.
    pub async fn unread(&self, limit: i64) -> AppResult<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts WHERE is_read = FALSE ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load unread contacts", e))
    }

    /// Load every inquiry (for statistics aggregation).
    pub async fn snapshot(&self) -> AppResult<Vec<Contact>> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load contacts", e))
    }

    /// Create a new inquiry with status `new`.
    pub async fn create(&self, data: &CreateContact) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (name, email, phone, subject, message, priority) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.subject)
        .bind(&data.message)
        .bind(data.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create contact", e))
    }

    /// Update an inquiry's triage fields.
    pub async fn update(&self, id: Uuid, data: &UpdateContact) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET status = COALESCE($2, status), \
                                 priority = COALESCE($3, priority), \
                                 assigned_to = COALESCE($4, assigned_to), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.status)
        .bind(data.priority)
        .bind(data.assigned_to)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update contact", e))?
        .ok_or_else(|| AppError::not_found(format!("Contact {id} not found")))
    }

    /// Mark an inquiry read, recording reader and timestamp.
    ///
    /// Idempotent: a repeat call keeps the status and overwrites the
    /// audit fields with the latest reader.
    pub async fn mark_read(&self, id: Uuid, reader: Uuid) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET is_read = TRUE, \
                                 read_by = $2, \
                                 read_at = NOW(), \
                                 status = CASE WHEN status = 'new' THEN 'read'::contact_status ELSE status END, \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(reader)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark contact read", e))?
        .ok_or_else(|| AppError::not_found(format!("Contact {id} not found")))
    }

    /// Mark an inquiry replied, recording responder and timestamp.
    pub async fn mark_replied(&self, id: Uuid, responder: Uuid) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET status = 'replied', \
                                 replied_by = $2, \
                                 replied_at = NOW(), \
                                 is_read = TRUE, \
                                 read_by = COALESCE(read_by, $2), \
                                 read_at = COALESCE(read_at, NOW()), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(responder)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark contact replied", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Contact {id} not found")))
    }

    /// Set an inquiry's workflow status directly (spam/closed tagging).
    pub async fn set_status(&self, id: Uuid, status: ContactStatus) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set contact status", e))?
        .ok_or_else(|| AppError::not_found(format!("Contact {id} not found")))
    }

    /// Assign an inquiry to a staff account.
    pub async fn assign(&self, id: Uuid, admin_id: Uuid) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET assigned_to = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign contact", e))?
        .ok_or_else(|| AppError::not_found(format!("Contact {id} not found")))
    }

    /// Apply the same triage fields to a batch of inquiries.
    ///
    /// Returns the number of rows touched.
    pub async fn bulk_update(&self, ids: &[Uuid], data: &BulkContactUpdate) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE contacts SET status = COALESCE($2, status), \
                                 priority = COALESCE($3, priority), \
                                 assigned_to = COALESCE($4, assigned_to), \
                                 updated_at = NOW() \
             WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(data.status)
        .bind(data.priority)
        .bind(data.assigned_to)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to bulk update contacts", e))?;

        Ok(result.rows_affected())
    }

    /// Delete an inquiry by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete contact", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Append a staff note to an inquiry.
    pub async fn add_note(
        &self,
        contact_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> AppResult<ContactNote> {
        sqlx::query_as::<_, ContactNote>(
            "INSERT INTO contact_notes (contact_id, author_id, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(contact_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add note", e))
    }

    /// Load an inquiry's notes in chronological order.
    pub async fn notes(&self, contact_id: Uuid) -> AppResult<Vec<ContactNote>> {
        sqlx::query_as::<_, ContactNote>(
            "SELECT * FROM contact_notes WHERE contact_id = $1 ORDER BY created_at ASC",
        )
        .bind(contact_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load notes", e))
    }
}

/// Append the filter's WHERE clauses to a query.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &ContactFilter) {
    if let Some(status) = filter.status {
        query.push(" AND status = ");
        query.push_bind(status);
    }
    if let Some(priority) = filter.priority {
        query.push(" AND priority = ");
        query.push_bind(priority);
    }
    if let Some(subject) = filter.subject {
        query.push(" AND subject = ");
        query.push_bind(subject);
    }
    if filter.unread_only {
        query.push(" AND is_read = FALSE");
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR email ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR message ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}
