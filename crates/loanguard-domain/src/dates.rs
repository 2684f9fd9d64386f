//! Calendar arithmetic for the rolling rule windows.

use time::{Date, Duration, Month};

/// `date` shifted back by whole days.
pub fn days_back(date: Date, days: u32) -> Date {
    date - Duration::days(i64::from(days))
}

/// `date` shifted back by calendar months, with the day-of-month clamped to
/// the target month's length (May 31 minus three months lands on the last
/// day of February).
pub fn months_back(date: Date, months: u32) -> Date {
    let zero_based =
        i64::from(date.year()) * 12 + i64::from(date.month() as u8) - 1 - i64::from(months);
    let year = zero_based.div_euclid(12) as i32;
    let month =
        Month::try_from((zero_based.rem_euclid(12) + 1) as u8).expect("month index is 1..=12");
    let day = date.day().min(month.length(year));
    Date::from_calendar_date(year, month, day).expect("clamped day fits the month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn days_back_crosses_month_and_year_boundaries() {
        assert_eq!(days_back(date!(2025 - 01 - 10), 15), date!(2024 - 12 - 26));
        assert_eq!(days_back(date!(2025 - 06 - 15), 0), date!(2025 - 06 - 15));
    }

    #[test]
    fn months_back_clamps_to_month_length() {
        assert_eq!(months_back(date!(2024 - 05 - 31), 3), date!(2024 - 02 - 29));
        assert_eq!(months_back(date!(2023 - 05 - 31), 3), date!(2023 - 02 - 28));
        assert_eq!(months_back(date!(2025 - 07 - 31), 1), date!(2025 - 06 - 30));
    }

    #[test]
    fn months_back_crosses_year_boundaries() {
        assert_eq!(months_back(date!(2025 - 01 - 15), 2), date!(2024 - 11 - 15));
        assert_eq!(months_back(date!(2025 - 06 - 15), 18), date!(2023 - 12 - 15));
        assert_eq!(months_back(date!(2025 - 06 - 15), 0), date!(2025 - 06 - 15));
    }
}
