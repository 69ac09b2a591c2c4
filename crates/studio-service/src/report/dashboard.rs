//! Dashboard service — loads snapshots and delegates to the pure
//! aggregation functions.

use std::sync::Arc;

use chrono::Utc;

use studio_core::result::AppResult;
use studio_database::repositories::booking::BookingRepository;
use studio_database::repositories::contact::ContactRepository;

use super::aggregate::{self, DashboardOverview};

/// Builds the combined admin dashboard.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Contact repository.
    contact_repo: Arc<ContactRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(booking_repo: Arc<BookingRepository>, contact_repo: Arc<ContactRepository>) -> Self {
        Self {
            booking_repo,
            contact_repo,
        }
    }

    /// Computes the dashboard overview from fresh snapshots.
    pub async fn overview(&self) -> AppResult<DashboardOverview> {
        let bookings = self.booking_repo.snapshot().await?;
        let contacts = self.contact_repo.snapshot().await?;
        Ok(aggregate::dashboard_overview(&bookings, &contacts, Utc::now()))
    }
}
