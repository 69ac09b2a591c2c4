//! Booking lifecycle service.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use studio_core::config::SchedulingConfig;
use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_database::repositories::admin::AdminRepository;
use studio_database::repositories::booking::{BookingFilter, BookingRepository};
use studio_entity::booking::{
    Booking, BookingNote, BookingStatus, CreateBooking, UpdateBooking,
};

use crate::context::RequestContext;
use crate::report::aggregate::{self, BookingOverview};

use super::availability;

/// Result of a successful reschedule: the closed original and its
/// successor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleOutcome {
    /// The original booking, now marked `rescheduled`.
    pub original: Booking,
    /// The newly created successor booking (status `pending`).
    pub successor: Booking,
}

/// Handles booking creation, queries, lifecycle transitions, and the
/// reschedule workflow.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Staff repository (photographer assignment checks).
    admin_repo: Arc<AdminRepository>,
    /// Business-hours configuration for the availability engine.
    scheduling: SchedulingConfig,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        admin_repo: Arc<AdminRepository>,
        scheduling: SchedulingConfig,
    ) -> Self {
        Self {
            booking_repo,
            admin_repo,
            scheduling,
        }
    }

    /// Creates a booking from a public submission.
    ///
    /// Rejects the request with a conflict if the exact (date, time) slot
    /// is held by a non-cancelled booking. The storage-level unique index
    /// backs this check up under concurrency.
    pub async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        if data.duration_hours < 1 {
            return Err(AppError::validation("Duration must be at least one hour"));
        }

        if let Some(existing) = self
            .booking_repo
            .find_conflicting(data.date, data.time, None)
            .await?
        {
            info!(
                date = %data.date,
                time = %data.time,
                blocking = %existing.id,
                "Rejected booking for occupied slot"
            );
            return Err(AppError::conflict(
                "Time slot is already booked for this date",
            ));
        }

        let booking = self.booking_repo.create(&data).await?;
        info!(booking_id = %booking.id, date = %booking.date, "Booking created");
        Ok(booking)
    }

    /// Computes the open slots for a date.
    pub async fn available_slots(&self, date: NaiveDate) -> AppResult<Vec<NaiveTime>> {
        let bookings = self.booking_repo.find_on_date(date).await?;
        Ok(availability::available_slots(
            date,
            &bookings,
            &self.scheduling,
        ))
    }

    /// Lists bookings matching the filter.
    pub async fn list(
        &self,
        filter: &BookingFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        self.booking_repo.list(filter, page).await
    }

    /// Loads a booking with its notes.
    pub async fn get(&self, id: Uuid) -> AppResult<(Booking, Vec<BookingNote>)> {
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        let notes = self.booking_repo.notes(id).await?;
        Ok((booking, notes))
    }

    /// Applies a staff edit. When the slot moves, the new (date, time)
    /// is conflict-checked against everything except this booking.
    pub async fn update(&self, id: Uuid, data: UpdateBooking) -> AppResult<Booking> {
        let existing = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if let Some(d) = data.duration_hours {
            if d < 1 {
                return Err(AppError::validation("Duration must be at least one hour"));
            }
        }

        let target_date = data.date.unwrap_or(existing.date);
        let target_time = data.time.unwrap_or(existing.time);
        if target_date != existing.date || target_time != existing.time {
            if self
                .booking_repo
                .find_conflicting(target_date, target_time, Some(id))
                .await?
                .is_some()
            {
                return Err(AppError::conflict(
                    "Time slot is already booked for this date",
                ));
            }
        }

        self.booking_repo.update(id, &data).await
    }

    /// Transitions a booking's lifecycle status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        cancellation_reason: Option<String>,
    ) -> AppResult<Booking> {
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if !booking.status.can_transition_to(status) {
            return Err(AppError::validation(format!(
                "Cannot transition booking from '{}' to '{}'",
                booking.status, status
            )));
        }

        let reason = match status {
            BookingStatus::Cancelled => cancellation_reason,
            _ => None,
        };

        let updated = self
            .booking_repo
            .update_status(id, status, reason.as_deref())
            .await?;
        info!(booking_id = %id, status = %status, "Booking status updated");
        Ok(updated)
    }

    /// Moves a booking to a new slot.
    ///
    /// Conflict-checks the target slot (excluding the booking being
    /// moved), then atomically marks the original `rescheduled` and
    /// creates a pending successor linked via `rescheduled_from`. A
    /// conflict leaves both records untouched.
    pub async fn reschedule(
        &self,
        id: Uuid,
        new_date: NaiveDate,
        new_time: NaiveTime,
        reason: Option<String>,
    ) -> AppResult<RescheduleOutcome> {
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if booking.status.is_terminal() {
            return Err(AppError::validation(format!(
                "Cannot reschedule a '{}' booking",
                booking.status
            )));
        }

        if self
            .booking_repo
            .find_conflicting(new_date, new_time, Some(id))
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Time slot is already booked for the new date",
            ));
        }

        let successor = CreateBooking::successor_of(&booking, new_date, new_time);
        let reason = reason.unwrap_or_else(|| "Rescheduled by admin".to_string());

        let (original, successor) = self
            .booking_repo
            .reschedule(id, &successor, &reason)
            .await?;

        info!(
            original = %original.id,
            successor = %successor.id,
            date = %new_date,
            "Booking rescheduled"
        );

        Ok(RescheduleOutcome {
            original,
            successor,
        })
    }

    /// Assigns a photographer after confirming the staff account exists.
    pub async fn assign_photographer(
        &self,
        id: Uuid,
        photographer_id: Uuid,
    ) -> AppResult<Booking> {
        self.admin_repo
            .find_by_id(photographer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Photographer not found"))?;

        self.booking_repo
            .assign_photographer(id, photographer_id)
            .await
    }

    /// Appends a staff note to a booking.
    pub async fn add_note(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        content: &str,
    ) -> AppResult<BookingNote> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        self.booking_repo
            .add_note(id, ctx.admin_id, content)
            .await
    }

    /// Deletes a booking outright.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.booking_repo.delete(id).await? {
            return Err(AppError::not_found("Booking not found"));
        }
        info!(booking_id = %id, "Booking deleted");
        Ok(())
    }

    /// Computes the booking statistics overview from a full snapshot.
    pub async fn stats(&self) -> AppResult<BookingOverview> {
        let bookings = self.booking_repo.snapshot().await?;
        Ok(aggregate::booking_overview(&bookings, Utc::now()))
    }
}
