//! Dues tariffs and billing-period arithmetic.

use chrono::{Datelike, Days, Local, Months, NaiveDate};

use crate::models::{PaymentHistoryEntry, PaymentPeriod, PaymentType};
use crate::validation::parse_date;

pub const SECURITY_MONTHLY_FEE: u64 = 100_000;
pub const CLEANING_MONTHLY_FEE: u64 = 15_000;

pub fn monthly_tariff(payment_type: PaymentType) -> u64 {
    match payment_type {
        PaymentType::Security => SECURITY_MONTHLY_FEE,
        PaymentType::Cleaning => CLEANING_MONTHLY_FEE,
    }
}

/// Default amount for a dues payment: the monthly tariff, twelve times for yearly cadence.
pub fn default_amount(payment_type: PaymentType, period: PaymentPeriod) -> u64 {
    let monthly = monthly_tariff(payment_type);
    match period {
        PaymentPeriod::Monthly => monthly,
        PaymentPeriod::Yearly => monthly * 12,
    }
}

/// Last day of a billing period starting at `start`: one cadence unit later, minus a day.
///
/// Month arithmetic clamps to the end of shorter months, so a period starting on
/// 31 January ends on 27 February (28 in leap years) instead of rolling into March.
/// The next period is expected to start on `end + 1`, which keeps consecutive
/// periods free of gaps and overlaps.
pub fn period_end(start: NaiveDate, period: PaymentPeriod) -> Option<NaiveDate> {
    let months = match period {
        PaymentPeriod::Monthly => Months::new(1),
        PaymentPeriod::Yearly => Months::new(12),
    };
    start
        .checked_add_months(months)?
        .checked_sub_days(Days::new(1))
}

/// Same as [`period_end`] over form values; an unparsable start gives an empty end.
pub fn period_end_text(start: &str, period: PaymentPeriod) -> String {
    parse_date(start)
        .and_then(|d| period_end(d, period))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Local calendar date, used for form defaults and the current-month dues check.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether each dues type has a paid period starting in the month of `today`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonthlyDuesStatus {
    pub security_paid: bool,
    pub cleaning_paid: bool,
}

impl MonthlyDuesStatus {
    pub fn is_paid(&self, payment_type: PaymentType) -> bool {
        match payment_type {
            PaymentType::Security => self.security_paid,
            PaymentType::Cleaning => self.cleaning_paid,
        }
    }
}

pub fn current_month_status(history: &[PaymentHistoryEntry], today: NaiveDate) -> MonthlyDuesStatus {
    let paid_this_month = |payment_type: PaymentType| {
        history
            .iter()
            .flat_map(|entry| entry.payments.iter())
            .filter(|p| p.is_paid && p.payment_type == payment_type)
            .filter_map(|p| parse_date(&p.period_start))
            .any(|start| start.year() == today.year() && start.month() == today.month())
    };

    MonthlyDuesStatus {
        security_paid: paid_this_month(PaymentType::Security),
        cleaning_paid: paid_this_month(PaymentType::Cleaning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_amount_follows_tariff_and_cadence() {
        assert_eq!(default_amount(PaymentType::Security, PaymentPeriod::Monthly), 100_000);
        assert_eq!(default_amount(PaymentType::Cleaning, PaymentPeriod::Monthly), 15_000);
        assert_eq!(default_amount(PaymentType::Security, PaymentPeriod::Yearly), 1_200_000);
        assert_eq!(default_amount(PaymentType::Cleaning, PaymentPeriod::Yearly), 180_000);
    }

    #[test]
    fn monthly_period_ends_the_day_before_next_month() {
        assert_eq!(period_end(date(2024, 3, 1), PaymentPeriod::Monthly), Some(date(2024, 3, 31)));
        assert_eq!(period_end(date(2024, 3, 15), PaymentPeriod::Monthly), Some(date(2024, 4, 14)));
        assert_eq!(period_end(date(2024, 12, 10), PaymentPeriod::Monthly), Some(date(2025, 1, 9)));
    }

    #[test]
    fn monthly_period_clamps_short_months() {
        assert_eq!(period_end(date(2024, 1, 31), PaymentPeriod::Monthly), Some(date(2024, 2, 28)));
        assert_eq!(period_end(date(2023, 1, 31), PaymentPeriod::Monthly), Some(date(2023, 2, 27)));
    }

    #[test]
    fn next_period_starts_the_day_after_the_end() {
        let mut start = date(2023, 1, 31);
        for _ in 0..3 {
            let end = period_end(start, PaymentPeriod::Monthly).unwrap();
            assert!(end >= start);
            start = end.succ_opt().unwrap();
        }
        assert_eq!(start, date(2023, 4, 28));
    }

    #[test]
    fn yearly_period_ends_the_day_before_the_anniversary() {
        assert_eq!(period_end(date(2024, 1, 1), PaymentPeriod::Yearly), Some(date(2024, 12, 31)));
        assert_eq!(period_end(date(2024, 2, 29), PaymentPeriod::Yearly), Some(date(2025, 2, 27)));
    }

    #[test]
    fn period_end_text_is_empty_without_a_start() {
        assert_eq!(period_end_text("2024-03-01", PaymentPeriod::Monthly), "2024-03-31");
        assert_eq!(period_end_text("", PaymentPeriod::Monthly), "");
    }

    #[test]
    fn current_month_status_only_counts_paid_periods_starting_this_month() {
        let history: Vec<PaymentHistoryEntry> = serde_json::from_str(
            r#"[
                {"resident": null, "payments": [
                    {"id": 1, "payment_type": "security", "amount": 100000, "period_start": "2024-03-01", "is_paid": true},
                    {"id": 2, "payment_type": "cleaning", "amount": 15000, "period_start": "2024-03-01", "is_paid": false},
                    {"id": 3, "payment_type": "cleaning", "amount": 15000, "period_start": "2023-03-01", "is_paid": true}
                ]}
            ]"#,
        )
        .unwrap();

        let status = current_month_status(&history, date(2024, 3, 20));

        assert!(status.security_paid);
        assert!(!status.cleaning_paid);
        assert!(status.is_paid(PaymentType::Security));
    }
}
