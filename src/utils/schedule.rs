use crate::models::{MembershipType, ReminderKind};
use chrono::{Duration, NaiveDate};

/// Next due date: last payment date plus the tier's renewal period.
pub fn next_due_date(payment_date: NaiveDate, membership_type: MembershipType) -> NaiveDate {
    payment_date + Duration::days(membership_type.period_days())
}

/// Whole days until the next due date. Negative once the due date has passed.
pub fn days_remaining(
    payment_date: NaiveDate,
    membership_type: MembershipType,
    today: NaiveDate,
) -> i64 {
    (next_due_date(payment_date, membership_type) - today).num_days()
}

/// Classify a member's payment status. `None` means no reminder is pending:
/// the due date is further out than the member's reminder window.
pub fn classify(days_remaining: i64, reminder_days: i32) -> Option<ReminderKind> {
    if days_remaining < 0 {
        Some(ReminderKind::Overdue)
    } else if days_remaining <= reminder_days as i64 {
        Some(ReminderKind::DueSoon)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_due_date_offsets() {
        let paid = date(2024, 1, 1);
        assert_eq!(
            next_due_date(paid, MembershipType::Monthly),
            date(2024, 1, 31)
        );
        assert_eq!(
            next_due_date(paid, MembershipType::Quarterly),
            date(2024, 3, 31)
        );
        assert_eq!(
            next_due_date(paid, MembershipType::HalfYearly),
            date(2024, 6, 29)
        );
        assert_eq!(
            next_due_date(paid, MembershipType::Annual),
            date(2024, 12, 31)
        );
    }

    #[test]
    fn test_due_soon_window() {
        // Paid 2024-01-01 monthly, due 2024-01-31; on 2024-01-20 there are
        // 10 days remaining, inside the default 30-day window.
        let remaining = days_remaining(date(2024, 1, 1), MembershipType::Monthly, date(2024, 1, 20));
        assert_eq!(remaining, 10);
        assert_eq!(classify(remaining, 30), Some(ReminderKind::DueSoon));
    }

    #[test]
    fn test_overdue_severity() {
        let remaining = days_remaining(date(2024, 1, 1), MembershipType::Monthly, date(2024, 2, 15));
        assert_eq!(remaining, -15);
        assert_eq!(classify(remaining, 30), Some(ReminderKind::Overdue));
        assert_eq!(remaining.abs(), 15);
    }

    #[test]
    fn test_outside_window_not_pending() {
        let remaining = days_remaining(date(2024, 1, 1), MembershipType::Annual, date(2024, 1, 20));
        assert_eq!(classify(remaining, 30), None);
        // Boundary: exactly reminder_days out is still due-soon.
        assert_eq!(classify(30, 30), Some(ReminderKind::DueSoon));
        assert_eq!(classify(31, 30), None);
        assert_eq!(classify(0, 30), Some(ReminderKind::DueSoon));
    }
}
