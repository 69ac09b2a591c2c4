//! Slot availability engine.
//!
//! Pure functions over a snapshot of a day's bookings — no storage
//! access, so slot arithmetic is testable without a database. The caller
//! supplies the non-cancelled bookings for the date.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use studio_core::config::SchedulingConfig;
use studio_entity::booking::Booking;

/// Compute the open slots for a date, in chronological order.
///
/// Weekends (per config) yield an empty list. For business days, every
/// slot start within business hours is generated, then any slot whose
/// start falls inside an existing booking's occupied interval
/// `[start, start + duration)` is excluded. The full list is
/// materialized — slot counts are bounded by business hours.
pub fn available_slots(
    date: NaiveDate,
    bookings: &[Booking],
    config: &SchedulingConfig,
) -> Vec<NaiveTime> {
    if config.is_weekend(date.weekday()) {
        return Vec::new();
    }

    let occupied: Vec<(u32, u32)> = bookings
        .iter()
        .filter(|b| b.date == date && b.occupies_slot())
        .map(|b| b.occupied_minutes())
        .collect();

    all_slot_starts(config)
        .into_iter()
        .filter(|slot| {
            let minute = slot.hour() * 60 + slot.minute();
            !occupied
                .iter()
                .any(|(start, end)| minute >= *start && minute < *end)
        })
        .collect()
}

/// Generate every slot start time within business hours.
fn all_slot_starts(config: &SchedulingConfig) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    let mut minute = config.open_hour * 60;
    let end = config.close_hour * 60;
    while minute < end {
        if let Some(time) = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0) {
            slots.push(time);
        }
        minute += config.slot_minutes.max(1);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use studio_entity::booking::{
        BookingStatus, PackageTier, PaymentStatus, ServiceType,
    };
    use uuid::Uuid;

    // 2024-04-15 is a Monday; 2024-04-13 a Saturday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
    }

    fn booking_at(date: NaiveDate, hour: u32, duration: i32, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@example.com".to_string(),
            customer_phone: "555-0100".to_string(),
            service_type: ServiceType::SoloPortraits,
            package: PackageTier::Essential,
            date,
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            duration_hours: duration,
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            price_amount: Decimal::new(15000, 2),
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

    fn labels(slots: &[NaiveTime]) -> Vec<String> {
        slots.iter().map(|t| t.format("%H:%M").to_string()).collect()
    }

    #[test]
    fn test_weekend_has_no_slots() {
        let saturday = NaiveDate::from_ymd_opt(2024, 4, 13).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 4, 14).unwrap();
        let config = SchedulingConfig::default();
        assert!(available_slots(saturday, &[], &config).is_empty());
        assert!(available_slots(sunday, &[], &config).is_empty());
    }

    #[test]
    fn test_empty_day_has_all_business_hours() {
        let config = SchedulingConfig::default();
        let slots = labels(&available_slots(monday(), &[], &config));
        assert_eq!(slots.len(), 9);
        assert_eq!(slots[0], "09:00");
        assert_eq!(slots[8], "17:00");
    }

    #[test]
    fn test_booking_blocks_its_duration_window() {
        let config = SchedulingConfig::default();
        let bookings = vec![booking_at(monday(), 10, 2, BookingStatus::Pending)];
        let slots = labels(&available_slots(monday(), &bookings, &config));
        assert!(!slots.contains(&"10:00".to_string()));
        assert!(!slots.contains(&"11:00".to_string()));
        assert!(slots.contains(&"09:00".to_string()));
        assert!(slots.contains(&"12:00".to_string()));
    }

    #[test]
    fn test_cancelled_booking_releases_its_slot() {
        let config = SchedulingConfig::default();
        let bookings = vec![booking_at(monday(), 10, 1, BookingStatus::Cancelled)];
        let slots = labels(&available_slots(monday(), &bookings, &config));
        assert!(slots.contains(&"10:00".to_string()));
    }

    #[test]
    fn test_rescheduled_booking_still_blocks() {
        let config = SchedulingConfig::default();
        let bookings = vec![booking_at(monday(), 10, 1, BookingStatus::Rescheduled)];
        let slots = labels(&available_slots(monday(), &bookings, &config));
        assert!(!slots.contains(&"10:00".to_string()));
    }

    #[test]
    fn test_slots_are_chronological() {
        let config = SchedulingConfig::default();
        let bookings = vec![
            booking_at(monday(), 13, 1, BookingStatus::Confirmed),
            booking_at(monday(), 9, 1, BookingStatus::Pending),
        ];
        let slots = available_slots(monday(), &bookings, &config);
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(slots, sorted);
    }
}
