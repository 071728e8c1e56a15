//! Slot Calculator — fixed candidate times reduced by a weekday rule.
//!
//! This is acknowledged placeholder logic: no persistence, no collision
//! check against existing appointments, no capacity model. Same date in,
//! same slot list out.

use chrono::{Datelike, NaiveDate, Weekday};

const BASE_HOURS: [u32; 7] = [10, 11, 12, 14, 15, 16, 17];

/// Slots removed on Saturdays and Sundays.
const WEEKEND_BLOCKED: [&str; 2] = ["12:00", "16:00"];

/// Parses a calendar day strictly as `YYYY-MM-DD`.
pub fn parse_day(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD".to_string())
}

/// Returns the bookable times for `day`, reduced on weekends.
pub fn available_slots(day: NaiveDate) -> Vec<String> {
    let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);

    BASE_HOURS
        .iter()
        .map(|hour| format!("{hour:02}:00"))
        .filter(|slot| !(weekend && WEEKEND_BLOCKED.contains(&slot.as_str())))
        .collect()
}
