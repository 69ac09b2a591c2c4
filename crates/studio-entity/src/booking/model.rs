//! Booking entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::catalog::{PackageTier, ServiceType};
use super::status::{BookingStatus, PaymentStatus};

/// A reservation of a time slot for a photography session.
///
/// At most one non-cancelled booking may exist per (date, time) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Booked service.
    pub service_type: ServiceType,
    /// Pricing tier.
    pub package: PackageTier,
    /// Session calendar day.
    pub date: NaiveDate,
    /// Session start time.
    pub time: NaiveTime,
    /// Session length in whole hours.
    pub duration_hours: i32,
    /// Shoot location street address.
    pub address: String,
    /// Shoot location city.
    pub city: String,
    /// Shoot location state.
    pub state: String,
    /// Shoot location postal code.
    pub postal_code: String,
    /// Quoted price.
    pub price_amount: Decimal,
    /// ISO currency code.
    pub price_currency: String,
    /// Discount applied to the quoted price.
    pub price_discount: Decimal,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Assigned photographer (staff account).
    pub photographer_id: Option<Uuid>,
    /// Free-text requirements supplied by the customer.
    pub special_requirements: Option<String>,
    /// Reason recorded on cancellation or reschedule.
    pub cancellation_reason: Option<String>,
    /// The booking this one was rescheduled from, if any.
    pub rescheduled_from: Option<Uuid>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether this booking still occupies its slot for conflict purposes.
    ///
    /// Only cancellation releases a slot; a rescheduled original keeps
    /// blocking its old slot.
    pub fn occupies_slot(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// The half-open occupied interval in minutes since midnight.
    pub fn occupied_minutes(&self) -> (u32, u32) {
        use chrono::Timelike;
        let start = self.time.hour() * 60 + self.time.minute();
        (start, start + self.duration_hours as u32 * 60)
    }
}

/// An append-only staff note attached to a booking.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingNote {
    /// Unique note identifier.
    pub id: Uuid,
    /// The booking this note belongs to.
    pub booking_id: Uuid,
    /// The staff account that wrote the note.
    pub author_id: Uuid,
    /// Note body.
    pub content: String,
    /// When the note was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: ServiceType,
    pub package: PackageTier,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_hours: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub price_amount: Decimal,
    pub price_currency: String,
    pub price_discount: Decimal,
    pub special_requirements: Option<String>,
    /// Set by the reschedule workflow; `None` for public submissions.
    pub rescheduled_from: Option<Uuid>,
}

impl CreateBooking {
    /// Build the creation payload for a reschedule successor: all fields
    /// copied from the original except date and time.
    pub fn successor_of(original: &Booking, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            customer_name: original.customer_name.clone(),
            customer_email: original.customer_email.clone(),
            customer_phone: original.customer_phone.clone(),
            service_type: original.service_type,
            package: original.package,
            date,
            time,
            duration_hours: original.duration_hours,
            address: original.address.clone(),
            city: original.city.clone(),
            state: original.state.clone(),
            postal_code: original.postal_code.clone(),
            price_amount: original.price_amount,
            price_currency: original.price_currency.clone(),
            price_discount: original.price_discount,
            special_requirements: original.special_requirements.clone(),
            rescheduled_from: Some(original.id),
        }
    }
}

/// Data for a staff edit of an existing booking.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBooking {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service_type: Option<ServiceType>,
    pub package: Option<PackageTier>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub duration_hours: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub price_amount: Option<Decimal>,
    pub price_discount: Option<Decimal>,
    pub payment_status: Option<PaymentStatus>,
    pub special_requirements: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@example.com".to_string(),
            customer_phone: "555-0100".to_string(),
            service_type: ServiceType::FamilyPortraits,
            package: PackageTier::Essential,
            date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_hours: 2,
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            price_amount: Decimal::new(25000, 2),
            price_currency: "USD".to_string(),
            price_discount: Decimal::ZERO,
            status,
            payment_status: PaymentStatus::Pending,
            photographer_id: None,
            special_requirements: None,
            cancellation_reason: None,
            rescheduled_from: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_slot_occupancy() {
        assert!(booking(BookingStatus::Pending).occupies_slot());
        assert!(booking(BookingStatus::Rescheduled).occupies_slot());
        assert!(!booking(BookingStatus::Cancelled).occupies_slot());
    }

    #[test]
    fn test_occupied_minutes() {
        let b = booking(BookingStatus::Pending);
        assert_eq!(b.occupied_minutes(), (600, 720));
    }

    #[test]
    fn test_successor_copies_everything_but_the_slot() {
        let original = booking(BookingStatus::Confirmed);
        let new_date = NaiveDate::from_ymd_opt(2024, 4, 22).unwrap();
        let new_time = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        let successor = CreateBooking::successor_of(&original, new_date, new_time);
        assert_eq!(successor.date, new_date);
        assert_eq!(successor.time, new_time);
        assert_eq!(successor.customer_email, original.customer_email);
        assert_eq!(successor.price_amount, original.price_amount);
        assert_eq!(successor.rescheduled_from, Some(original.id));
    }
}
