//! Staff account repository implementation.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use studio_core::error::{AppError, ErrorKind};
use studio_core::result::AppResult;
use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_entity::admin::{Admin, AdminRole, CreateAdmin, UpdateAdmin};

/// Typed filter for staff account listings.
#[derive(Debug, Clone, Default)]
pub struct AdminFilter {
    /// Restrict to a single role.
    pub role: Option<AdminRole>,
    /// Case-insensitive substring match over name and email.
    pub search: Option<String>,
}

/// Repository for staff account CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new staff account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a staff account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e)
            })
    }

    /// Find a staff account by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }

    /// List staff accounts matching the filter, newest first.
    pub async fn list(
        &self,
        filter: &AdminFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Admin>> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM admins WHERE 1=1");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count admins", e))?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM admins WHERE 1=1");
        push_filters(&mut query, filter);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(page.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(page.offset() as i64);

        let admins = query
            .build_query_as::<Admin>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list admins", e))?;

        Ok(PageResponse::new(
            admins,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Load every staff account (for statistics aggregation).
    pub async fn snapshot(&self) -> AppResult<Vec<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load admins", e))
    }

    /// Create a new staff account.
    pub async fn create(&self, data: &CreateAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (name, email, password_hash, phone, role, permissions) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.phone)
        .bind(data.role)
        .bind(&data.permissions)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("admins_email_lower_key") =>
            {
                AppError::conflict("Admin with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    /// Update a staff account's fields.
    pub async fn update(&self, id: Uuid, data: &UpdateAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "UPDATE admins SET name = COALESCE($2, name), \
                               email = COALESCE($3, email), \
                               phone = COALESCE($4, phone), \
                               role = COALESCE($5, role), \
                               permissions = COALESCE($6, permissions), \
                               is_active = COALESCE($7, is_active), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.role)
        .bind(&data.permissions)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("admins_email_lower_key") =>
            {
                AppError::conflict("Admin with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update admin", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Admin {id} not found")))
    }

    /// Update a staff account's password hash.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE admins SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update password", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Admin {id} not found")));
        }
        Ok(())
    }

    /// Record a successful login.
    pub async fn update_last_login(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE admins SET last_login_at = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;
        Ok(())
    }

    /// Delete a staff account by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete admin", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Append the filter's WHERE clauses to a query.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &AdminFilter) {
    if let Some(role) = filter.role {
        query.push(" AND role = ");
        query.push_bind(role);
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR email ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}
