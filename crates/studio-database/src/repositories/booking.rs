//! Booking repository implementation.
//!
//! Slot uniqueness is enforced here by the `bookings_active_slot_key`
//! partial unique index — application-level conflict checks give callers
//! a friendly message, but the index is what closes the concurrent
//! check-then-insert race.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use studio_core::error::{AppError, ErrorKind};
use studio_core::result::AppResult;
use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_entity::booking::{
    Booking, BookingNote, BookingStatus, CreateBooking, ServiceType, UpdateBooking,
};

/// Name of the partial unique index guarding (date, time) slots.
const ACTIVE_SLOT_CONSTRAINT: &str = "bookings_active_slot_key";

/// Typed filter for booking listings.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    /// Restrict to a single lifecycle status.
    pub status: Option<BookingStatus>,
    /// Restrict to a single service.
    pub service_type: Option<ServiceType>,
    /// Earliest session date (inclusive).
    pub date_from: Option<NaiveDate>,
    /// Latest session date (inclusive).
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring match over customer name/email/phone.
    pub search: Option<String>,
}

/// Repository for booking CRUD, conflict checks, and the reschedule
/// transaction.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// Find the non-cancelled booking occupying the exact (date, time)
    /// slot, if any. `exclude` lets a reschedule skip the booking being
    /// moved.
    pub async fn find_conflicting(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        exclude: Option<Uuid>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings \
             WHERE date = $1 AND time = $2 AND status <> 'cancelled' \
               AND ($3::uuid IS NULL OR id <> $3)",
        )
        .bind(date)
        .bind(time)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check slot conflict", e)
        })
    }

    /// Load all non-cancelled bookings on a date (for slot generation).
    pub async fn find_on_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE date = $1 AND status <> 'cancelled' ORDER BY time ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load bookings for date", e)
        })
    }

    /// List bookings matching the filter, most recent session first.
    pub async fn list(
        &self,
        filter: &BookingFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM bookings WHERE 1=1");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count bookings", e)
            })?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM bookings WHERE 1=1");
        push_filters(&mut query, filter);
        query.push(" ORDER BY date DESC, created_at DESC LIMIT ");
        query.push_bind(page.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(page.offset() as i64);

        let bookings = query
            .build_query_as::<Booking>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Load every booking (for statistics aggregation).
    pub async fn snapshot(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load bookings", e))
    }

    /// Create a new booking with status `pending`.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (customer_name, customer_email, customer_phone, \
                                   service_type, package, date, time, duration_hours, \
                                   address, city, state, postal_code, \
                                   price_amount, price_currency, price_discount, \
                                   special_requirements, rescheduled_from) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(&data.customer_name)
        .bind(&data.customer_email)
        .bind(&data.customer_phone)
        .bind(data.service_type)
        .bind(data.package)
        .bind(data.date)
        .bind(data.time)
        .bind(data.duration_hours)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.postal_code)
        .bind(data.price_amount)
        .bind(&data.price_currency)
        .bind(data.price_discount)
        .bind(&data.special_requirements)
        .bind(data.rescheduled_from)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slot_conflict)
    }

    /// Update a booking's editable fields.
    pub async fn update(&self, id: Uuid, data: &UpdateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET customer_name = COALESCE($2, customer_name), \
                                 customer_email = COALESCE($3, customer_email), \
                                 customer_phone = COALESCE($4, customer_phone), \
                                 service_type = COALESCE($5, service_type), \
                                 package = COALESCE($6, package), \
                                 date = COALESCE($7, date), \
                                 time = COALESCE($8, time), \
                                 duration_hours = COALESCE($9, duration_hours), \
                                 address = COALESCE($10, address), \
                                 city = COALESCE($11, city), \
                                 state = COALESCE($12, state), \
                                 postal_code = COALESCE($13, postal_code), \
                                 price_amount = COALESCE($14, price_amount), \
                                 price_discount = COALESCE($15, price_discount), \
                                 payment_status = COALESCE($16, payment_status), \
                                 special_requirements = COALESCE($17, special_requirements), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.customer_name)
        .bind(&data.customer_email)
        .bind(&data.customer_phone)
        .bind(data.service_type)
        .bind(data.package)
        .bind(data.date)
        .bind(data.time)
        .bind(data.duration_hours)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.postal_code)
        .bind(data.price_amount)
        .bind(data.price_discount)
        .bind(data.payment_status)
        .bind(&data.special_requirements)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slot_conflict)?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Update a booking's lifecycle status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        cancellation_reason: Option<&str>,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, \
                                 cancellation_reason = COALESCE($3, cancellation_reason), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(cancellation_reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update status", e))?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Assign a photographer to a booking.
    pub async fn assign_photographer(
        &self,
        id: Uuid,
        photographer_id: Uuid,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET photographer_id = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(photographer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to assign photographer", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Atomically mark the original rescheduled and create its successor.
    ///
    /// Both writes run in a single transaction: the system never observes
    /// an original marked rescheduled without its successor, or vice
    /// versa. A slot collision on the successor insert rolls everything
    /// back and surfaces as a conflict.
    pub async fn reschedule(
        &self,
        original_id: Uuid,
        successor: &CreateBooking,
        reason: &str,
    ) -> AppResult<(Booking, Booking)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let new_booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (customer_name, customer_email, customer_phone, \
                                   service_type, package, date, time, duration_hours, \
                                   address, city, state, postal_code, \
                                   price_amount, price_currency, price_discount, \
                                   special_requirements, rescheduled_from) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(&successor.customer_name)
        .bind(&successor.customer_email)
        .bind(&successor.customer_phone)
        .bind(successor.service_type)
        .bind(successor.package)
        .bind(successor.date)
        .bind(successor.time)
        .bind(successor.duration_hours)
        .bind(&successor.address)
        .bind(&successor.city)
        .bind(&successor.state)
        .bind(&successor.postal_code)
        .bind(successor.price_amount)
        .bind(&successor.price_currency)
        .bind(successor.price_discount)
        .bind(&successor.special_requirements)
        .bind(successor.rescheduled_from)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_slot_conflict)?;

        let original = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'rescheduled', \
                                 cancellation_reason = $2, \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(original_id)
        .bind(reason)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark booking rescheduled", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reschedule", e)
        })?;

        Ok((original, new_booking))
    }

    /// Delete a booking by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete booking", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Append a staff note to a booking.
    pub async fn add_note(
        &self,
        booking_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> AppResult<BookingNote> {
        sqlx::query_as::<_, BookingNote>(
            "INSERT INTO booking_notes (booking_id, author_id, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(booking_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add note", e))
    }

    /// Load a booking's notes in chronological order.
    pub async fn notes(&self, booking_id: Uuid) -> AppResult<Vec<BookingNote>> {
        sqlx::query_as::<_, BookingNote>(
            "SELECT * FROM booking_notes WHERE booking_id = $1 ORDER BY created_at ASC",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load notes", e))
    }
}

/// Map a unique-index violation on the active-slot key to a conflict.
fn map_slot_conflict(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(ACTIVE_SLOT_CONSTRAINT) =>
        {
            AppError::conflict("Time slot is already booked for this date")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to write booking", e),
    }
}

/// Append the filter's WHERE clauses to a query.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &BookingFilter) {
    if let Some(status) = filter.status {
        query.push(" AND status = ");
        query.push_bind(status);
    }
    if let Some(service_type) = filter.service_type {
        query.push(" AND service_type = ");
        query.push_bind(service_type);
    }
    if let Some(date_from) = filter.date_from {
        query.push(" AND date >= ");
        query.push_bind(date_from);
    }
    if let Some(date_to) = filter.date_to {
        query.push(" AND date <= ");
        query.push_bind(date_to);
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        query.push(" AND (customer_name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR customer_email ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR customer_phone ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}
