//! Pure grouped-aggregation functions over record snapshots.
//!
//! Every function takes the records plus the caller's `now`, so time
//! windows are deterministic in tests.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_entity::admin::{Admin, AdminRole};
use studio_entity::booking::{Booking, BookingStatus, PackageTier, ServiceType};
use studio_entity::contact::{Contact, ContactPriority, ContactStatus};

/// Per-status booking counts and revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub status: BookingStatus,
    pub count: u64,
    pub revenue: Decimal,
}

/// Per-service booking counts and revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBreakdown {
    pub service_type: ServiceType,
    pub count: u64,
    pub revenue: Decimal,
}

/// Booking statistics overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingOverview {
    /// All bookings ever taken.
    pub total_bookings: u64,
    /// Bookings whose session date falls in the current calendar month.
    pub monthly_bookings: u64,
    /// Bookings whose session date is today.
    pub today_bookings: u64,
    /// Pending/confirmed bookings in the next seven days.
    pub upcoming_bookings: u64,
    pub by_status: Vec<StatusBreakdown>,
    pub by_service: Vec<ServiceBreakdown>,
}

/// Compute the booking statistics overview.
pub fn booking_overview(bookings: &[Booking], now: DateTime<Utc>) -> BookingOverview {
    let today = now.date_naive();
    let month_start = start_of_month(today);
    let month_end = end_of_month(today);
    let week_end = today + Duration::days(7);

    let monthly_bookings = bookings
        .iter()
        .filter(|b| b.date >= month_start && b.date <= month_end)
        .count() as u64;
    let today_bookings = bookings.iter().filter(|b| b.date == today).count() as u64;
    let upcoming_bookings = bookings
        .iter()
        .filter(|b| {
            b.date >= today
                && b.date <= week_end
                && matches!(b.status, BookingStatus::Pending | BookingStatus::Confirmed)
        })
        .count() as u64;

    let by_status = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
        BookingStatus::Rescheduled,
    ]
    .into_iter()
    .map(|status| {
        let matching = bookings.iter().filter(|b| b.status == status);
        StatusBreakdown {
            status,
            count: matching.clone().count() as u64,
            revenue: matching.map(|b| b.price_amount).sum(),
        }
    })
    .collect();

    let by_service = [
        ServiceType::FamilyPortraits,
        ServiceType::CouplesEngagement,
        ServiceType::KidsNewborns,
        ServiceType::SoloPortraits,
        ServiceType::ProductPhotography,
    ]
    .into_iter()
    .map(|service_type| {
        let matching = bookings.iter().filter(|b| b.service_type == service_type);
        ServiceBreakdown {
            service_type,
            count: matching.clone().count() as u64,
            revenue: matching.map(|b| b.price_amount).sum(),
        }
    })
    .collect();

    BookingOverview {
        total_bookings: bookings.len() as u64,
        monthly_bookings,
        today_bookings,
        upcoming_bookings,
        by_status,
        by_service,
    }
}

/// Per-status inquiry counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactStatusBreakdown {
    pub status: ContactStatus,
    pub count: u64,
}

/// Per-priority inquiry counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub priority: ContactPriority,
    pub count: u64,
}

/// Inquiry statistics overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactOverview {
    pub total_contacts: u64,
    /// Inquiries submitted in the current calendar month.
    pub monthly_contacts: u64,
    /// Inquiries submitted today.
    pub today_contacts: u64,
    /// Inquiries no staff member has seen.
    pub unread_contacts: u64,
    pub by_status: Vec<ContactStatusBreakdown>,
    pub by_priority: Vec<PriorityBreakdown>,
}

/// Compute the inquiry statistics overview.
pub fn contact_overview(contacts: &[Contact], now: DateTime<Utc>) -> ContactOverview {
    let today = now.date_naive();
    let month_start = start_of_month(today);
    let month_end = end_of_month(today);

    let monthly_contacts = contacts
        .iter()
        .filter(|c| {
            let d = c.created_at.date_naive();
            d >= month_start && d <= month_end
        })
        .count() as u64;
    let today_contacts = contacts
        .iter()
        .filter(|c| c.created_at.date_naive() == today)
        .count() as u64;
    let unread_contacts = contacts.iter().filter(|c| !c.is_read).count() as u64;

    let by_status = [
        ContactStatus::New,
        ContactStatus::Read,
        ContactStatus::Replied,
        ContactStatus::Closed,
        ContactStatus::Spam,
    ]
    .into_iter()
    .map(|status| ContactStatusBreakdown {
        status,
        count: contacts.iter().filter(|c| c.status == status).count() as u64,
    })
    .collect();

    let by_priority = [
        ContactPriority::Urgent,
        ContactPriority::High,
        ContactPriority::Medium,
        ContactPriority::Low,
    ]
    .into_iter()
    .map(|priority| PriorityBreakdown {
        priority,
        count: contacts.iter().filter(|c| c.priority == priority).count() as u64,
    })
    .collect();

    ContactOverview {
        total_contacts: contacts.len() as u64,
        monthly_contacts,
        today_contacts,
        unread_contacts,
        by_status,
        by_priority,
    }
}

/// A staff account's most recent login, for the admin overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentLogin {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub last_login_at: DateTime<Utc>,
}

/// Staff statistics overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOverview {
    pub total_admins: u64,
    pub active_admins: u64,
    pub super_admins: u64,
    pub regular_admins: u64,
    /// The five most recent logins.
    pub recent_logins: Vec<RecentLogin>,
}

/// Compute the staff statistics overview.
pub fn admin_overview(admins: &[Admin]) -> AdminOverview {
    let mut logged_in: Vec<&Admin> = admins.iter().filter(|a| a.last_login_at.is_some()).collect();
    logged_in.sort_by(|a, b| b.last_login_at.cmp(&a.last_login_at));

    AdminOverview {
        total_admins: admins.len() as u64,
        active_admins: admins.iter().filter(|a| a.is_active).count() as u64,
        super_admins: admins
            .iter()
            .filter(|a| a.role == AdminRole::SuperAdmin)
            .count() as u64,
        regular_admins: admins
            .iter()
            .filter(|a| a.role == AdminRole::Admin)
            .count() as u64,
        recent_logins: logged_in
            .into_iter()
            .take(5)
            .filter_map(|a| {
                a.last_login_at.map(|last_login_at| RecentLogin {
                    id: a.id,
                    name: a.name.clone(),
                    email: a.email.clone(),
                    last_login_at,
                })
            })
            .collect(),
    }
}

/// A month of booking volume and revenue for the dashboard trend line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Month label, e.g. "Apr 2024".
    pub month: String,
    pub bookings: u64,
    pub revenue: Decimal,
}

/// Short form of a booking for the dashboard's recent-activity list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDigest {
    pub id: Uuid,
    pub customer_name: String,
    pub service_type: ServiceType,
    pub package: PackageTier,
    pub price_amount: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Short form of an inquiry for the dashboard's recent-activity list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDigest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// The combined admin dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_bookings: u64,
    pub monthly_bookings: u64,
    pub yearly_bookings: u64,
    pub total_revenue: Decimal,
    pub monthly_revenue: Decimal,
    pub yearly_revenue: Decimal,
    pub pending_bookings: u64,
    pub confirmed_bookings: u64,
    pub completed_bookings: u64,
    pub cancelled_bookings: u64,
    pub total_contacts: u64,
    pub unread_contacts: u64,
    pub recent_bookings: Vec<BookingDigest>,
    pub recent_contacts: Vec<ContactDigest>,
    /// The last six months, oldest first.
    pub monthly_trends: Vec<MonthlyTrend>,
}

/// Compute the dashboard overview. Booking/revenue windows use the
/// record creation time (when business came in, not when the session
/// happens).
pub fn dashboard_overview(
    bookings: &[Booking],
    contacts: &[Contact],
    now: DateTime<Utc>,
) -> DashboardOverview {
    let today = now.date_naive();
    let month_start = start_of_month(today);
    let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);

    let created_on_or_after =
        |b: &&Booking, from: NaiveDate| b.created_at.date_naive() >= from;

    let monthly: Vec<&Booking> = bookings
        .iter()
        .filter(|b| created_on_or_after(b, month_start))
        .collect();
    let yearly: Vec<&Booking> = bookings
        .iter()
        .filter(|b| created_on_or_after(b, year_start))
        .collect();

    let count_status = |status: BookingStatus| {
        bookings.iter().filter(|b| b.status == status).count() as u64
    };

    let mut by_created = bookings.iter().collect::<Vec<_>>();
    by_created.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let recent_bookings = by_created
        .iter()
        .take(5)
        .map(|b| BookingDigest {
            id: b.id,
            customer_name: b.customer_name.clone(),
            service_type: b.service_type,
            package: b.package,
            price_amount: b.price_amount,
            status: b.status,
            created_at: b.created_at,
        })
        .collect();

    let mut contacts_by_created = contacts.iter().collect::<Vec<_>>();
    contacts_by_created.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let recent_contacts = contacts_by_created
        .iter()
        .take(5)
        .map(|c| ContactDigest {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            status: c.status,
            created_at: c.created_at,
        })
        .collect();

    let monthly_trends = (0..6)
        .rev()
        .map(|months_back| {
            let start = shift_month_start(today, months_back);
            let end = end_of_month(start);
            let in_month: Vec<&Booking> = bookings
                .iter()
                .filter(|b| {
                    let d = b.created_at.date_naive();
                    d >= start && d <= end
                })
                .collect();
            MonthlyTrend {
                month: start.format("%b %Y").to_string(),
                bookings: in_month.len() as u64,
                revenue: in_month.iter().map(|b| b.price_amount).sum(),
            }
        })
        .collect();

    DashboardOverview {
        total_bookings: bookings.len() as u64,
        monthly_bookings: monthly.len() as u64,
        yearly_bookings: yearly.len() as u64,
        total_revenue: bookings.iter().map(|b| b.price_amount).sum(),
        monthly_revenue: monthly.iter().map(|b| b.price_amount).sum(),
        yearly_revenue: yearly.iter().map(|b| b.price_amount).sum(),
        pending_bookings: count_status(BookingStatus::Pending),
        confirmed_bookings: count_status(BookingStatus::Confirmed),
        completed_bookings: count_status(BookingStatus::Completed),
        cancelled_bookings: count_status(BookingStatus::Cancelled),
        total_contacts: contacts.len() as u64,
        unread_contacts: contacts.iter().filter(|c| !c.is_read).count() as u64,
        recent_bookings,
        recent_contacts,
        monthly_trends,
    }
}

/// First day of the date's month.
fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the date's month.
fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = next_month(date.year(), date.month());
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(date)
}

/// First day of the month `months_back` months before the date's month.
fn shift_month_start(date: NaiveDate, months_back: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 - months_back as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};
    use studio_entity::booking::PaymentStatus;
    use studio_entity::contact::ContactSubject;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap()
    }

    fn booking(
        date: NaiveDate,
        created_at: DateTime<Utc>,
        status: BookingStatus,
        amount: i64,
    ) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@example.com".to_string(),
            customer_phone: "555-0100".to_string(),
            service_type: ServiceType::FamilyPortraits,
            package: PackageTier::Premium,
            date,
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_hours: 1,
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            price_amount: Decimal::new(amount, 0),
            price_currency: "USD".to_string(),
            price_discount: Decimal::ZERO,
            status,
            payment_status: PaymentStatus::Pending,
            photographer_id: None,
            special_requirements: None,
            cancellation_reason: None,
            rescheduled_from: None,
            created_at,
            updated_at: created_at,
        }
    }

    fn contact(created_at: DateTime<Utc>, is_read: bool) -> Contact {
        Contact {
            id: Uuid::new_v4(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            phone: None,
            subject: ContactSubject::General,
            message: "Hello".to_string(),
            priority: ContactPriority::Medium,
            status: if is_read {
                ContactStatus::Read
            } else {
                ContactStatus::New
            },
            assigned_to: None,
            is_read,
            read_by: None,
            read_at: None,
            replied_by: None,
            replied_at: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_booking_overview_windows() {
        let today = now().date_naive();
        let bookings = vec![
            booking(today, now(), BookingStatus::Pending, 100),
            booking(
                today + Duration::days(3),
                now(),
                BookingStatus::Confirmed,
                200,
            ),
            booking(
                today + Duration::days(30),
                now(),
                BookingStatus::Pending,
                400,
            ),
            booking(
                today - Duration::days(40),
                now(),
                BookingStatus::Completed,
                800,
            ),
        ];
        let overview = booking_overview(&bookings, now());
        assert_eq!(overview.total_bookings, 4);
        assert_eq!(overview.today_bookings, 1);
        // Today + the booking three days out.
        assert_eq!(overview.upcoming_bookings, 2);
        // Session dates within April 2024.
        assert_eq!(overview.monthly_bookings, 2);
    }

    #[test]
    fn test_booking_overview_revenue_by_status() {
        let today = now().date_naive();
        let bookings = vec![
            booking(today, now(), BookingStatus::Pending, 100),
            booking(today, now(), BookingStatus::Pending, 250),
            booking(today, now(), BookingStatus::Completed, 900),
        ];
        let overview = booking_overview(&bookings, now());
        let pending = overview
            .by_status
            .iter()
            .find(|s| s.status == BookingStatus::Pending)
            .unwrap();
        assert_eq!(pending.count, 2);
        assert_eq!(pending.revenue, Decimal::new(350, 0));
    }

    #[test]
    fn test_contact_overview_counts() {
        let contacts = vec![
            contact(now(), false),
            contact(now(), true),
            contact(now() - Duration::days(60), false),
        ];
        let overview = contact_overview(&contacts, now());
        assert_eq!(overview.total_contacts, 3);
        assert_eq!(overview.unread_contacts, 2);
        assert_eq!(overview.monthly_contacts, 2);
    }

    #[test]
    fn test_dashboard_trends_cover_six_months() {
        let today = now().date_naive();
        let bookings = vec![
            booking(today, now(), BookingStatus::Pending, 100),
            booking(
                today,
                now() - Duration::days(35),
                BookingStatus::Completed,
                300,
            ),
        ];
        let overview = dashboard_overview(&bookings, &[], now());
        assert_eq!(overview.monthly_trends.len(), 6);
        assert_eq!(overview.monthly_trends.last().unwrap().month, "Apr 2024");
        assert_eq!(overview.monthly_trends.last().unwrap().bookings, 1);
        let march = &overview.monthly_trends[4];
        assert_eq!(march.month, "Mar 2024");
        assert_eq!(march.revenue, Decimal::new(300, 0));
    }

    #[test]
    fn test_dashboard_recent_lists_capped_at_five() {
        let bookings: Vec<Booking> = (0..8)
            .map(|i| {
                booking(
                    now().date_naive(),
                    now() - Duration::hours(i),
                    BookingStatus::Pending,
                    100,
                )
            })
            .collect();
        let overview = dashboard_overview(&bookings, &[], now());
        assert_eq!(overview.recent_bookings.len(), 5);
        // Newest first.
        assert_eq!(overview.recent_bookings[0].created_at, now());
    }

    #[test]
    fn test_admin_overview_recent_logins() {
        let make = |role: AdminRole, active: bool, login: Option<DateTime<Utc>>| Admin {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            password_hash: "x".to_string(),
            phone: None,
            role,
            permissions: Vec::new(),
            is_active: active,
            last_login_at: login,
            created_at: now(),
            updated_at: now(),
        };
        let admins = vec![
            make(AdminRole::SuperAdmin, true, Some(now())),
            make(AdminRole::Admin, true, None),
            make(AdminRole::Admin, false, Some(now() - Duration::days(1))),
        ];
        let overview = admin_overview(&admins);
        assert_eq!(overview.total_admins, 3);
        assert_eq!(overview.active_admins, 2);
        assert_eq!(overview.super_admins, 1);
        assert_eq!(overview.regular_admins, 2);
        assert_eq!(overview.recent_logins.len(), 2);
        assert_eq!(overview.recent_logins[0].last_login_at, now());
    }

    #[test]
    fn test_month_arithmetic_across_year_boundary() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            shift_month_start(jan, 2),
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()
        );
        assert_eq!(
            end_of_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            end_of_month(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap()),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }
}
