//! Client-side bucketing for the analytics charts.
//!
//! Pure date math over the charges the dashboard already holds; nothing
//! here touches the network.

use api::models::Charge;
use chrono::{Datelike, Duration, NaiveDate};

/// One calendar day of charge activity.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub label: String,
    pub revenue: f64,
    pub transactions: usize,
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse the calendar day out of a server timestamp (any string starting
/// `YYYY-MM-DD`).
fn charge_day(created_at: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(created_at.get(..10)?, "%Y-%m-%d").ok()
}

/// Bucket charges into the trailing `days` calendar days ending at `today`.
///
/// Only succeeded charges count toward revenue; every charge in the window
/// counts as a transaction. Charges outside the window are dropped. The
/// 7-day range labels buckets by weekday, longer ranges by day-of-month.
pub fn bucket_charges(charges: &[Charge], days: i64, today: NaiveDate) -> Vec<DayBucket> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let day_charges: Vec<&Charge> = charges
                .iter()
                .filter(|c| charge_day(&c.created_at) == Some(date))
                .collect();
            let revenue = day_charges
                .iter()
                .filter(|c| c.status == "succeeded")
                .map(|c| c.amount)
                .sum();
            let label = if days == 7 {
                WEEKDAYS[date.weekday().num_days_from_sunday() as usize].to_string()
            } else {
                date.day().to_string()
            };
            DayBucket {
                date,
                label,
                revenue,
                transactions: day_charges.len(),
            }
        })
        .collect()
}

/// Largest revenue across the buckets, floored at 1.0 so bar heights never
/// divide by zero.
pub fn max_revenue(buckets: &[DayBucket]) -> f64 {
    buckets.iter().map(|b| b.revenue).fold(1.0, f64::max)
}

/// Today's date on the platform clock.
pub fn today() -> NaiveDate {
    chrono::DateTime::from_timestamp_millis(store::now_ms() as i64)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(created_at: &str, amount: f64, status: &str) -> Charge {
        Charge {
            id: "ch_1".to_string(),
            amount,
            currency: "USD".to_string(),
            status: status.to_string(),
            description: "test".to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_buckets_cover_the_trailing_window_in_order() {
        let buckets = bucket_charges(&[], 7, d("2026-08-07"));
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].date, d("2026-08-01"));
        assert_eq!(buckets[6].date, d("2026-08-07"));
    }

    #[test]
    fn test_only_succeeded_charges_count_toward_revenue() {
        let charges = vec![
            charge("2026-08-07T09:00:00Z", 100.0, "succeeded"),
            charge("2026-08-07T10:00:00Z", 40.0, "failed"),
            charge("2026-08-07T11:00:00Z", 60.0, "succeeded"),
        ];
        let buckets = bucket_charges(&charges, 7, d("2026-08-07"));
        let today = buckets.last().unwrap();
        assert_eq!(today.revenue, 160.0);
        // Every charge in the window still counts as a transaction.
        assert_eq!(today.transactions, 3);
    }

    #[test]
    fn test_out_of_window_charges_are_dropped() {
        let charges = vec![
            charge("2026-07-01T00:00:00Z", 500.0, "succeeded"),
            charge("2026-08-06T12:00:00Z", 25.0, "succeeded"),
        ];
        let buckets = bucket_charges(&charges, 7, d("2026-08-07"));
        let total: f64 = buckets.iter().map(|b| b.revenue).sum();
        assert_eq!(total, 25.0);
    }

    #[test]
    fn test_unparseable_timestamps_bucket_nowhere() {
        let charges = vec![charge("soon", 10.0, "succeeded")];
        let buckets = bucket_charges(&charges, 7, d("2026-08-07"));
        assert!(buckets.iter().all(|b| b.transactions == 0));
    }

    #[test]
    fn test_weekday_labels_for_seven_day_range() {
        // 2026-08-07 is a Friday.
        let buckets = bucket_charges(&[], 7, d("2026-08-07"));
        assert_eq!(buckets.last().unwrap().label, "Fri");

        let buckets = bucket_charges(&[], 30, d("2026-08-07"));
        assert_eq!(buckets.last().unwrap().label, "7");
    }

    #[test]
    fn test_max_revenue_floors_at_one() {
        assert_eq!(max_revenue(&[]), 1.0);
        let buckets = bucket_charges(
            &[charge("2026-08-07T00:00:00Z", 250.0, "succeeded")],
            7,
            d("2026-08-07"),
        );
        assert_eq!(max_revenue(&buckets), 250.0);
    }
}
