use chrono::{DateTime, Datelike, Duration, NaiveDate};

use crate::errors::ScheduleError;

/// Interprets a stored due date as the intended local calendar day.
///
/// Accepts either a plain `YYYY-MM-DD` value or an RFC 3339 datetime; for the
/// latter, `offset_minutes` (minutes east of UTC) is applied before truncating
/// to a date, so a timestamp persisted in UTC resolves to the day the user
/// actually meant. All scheduler arithmetic downstream is date-only; this is
/// the single place timezones are considered.
pub fn local_calendar_day(raw: &str, offset_minutes: i32) -> Result<NaiveDate, ScheduleError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        let local = datetime.naive_utc() + Duration::minutes(offset_minutes as i64);
        return Ok(local.date());
    }
    Err(ScheduleError::InvalidDate(trimmed.to_string()))
}

/// Moves a date forward or backward by whole calendar months, clamping the
/// day to the length of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

/// Moves a date forward by whole years, clamping Feb 29 to Feb 28 when the
/// target year is not a leap year.
pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn plain_dates_parse_without_offset() {
        assert_eq!(local_calendar_day("2024-06-10", -360).unwrap(), ymd(2024, 6, 10));
    }

    #[test]
    fn utc_midnight_resolves_to_previous_local_day_west_of_utc() {
        // Stored as UTC midnight, user sits at UTC-6: still the 9th locally.
        assert_eq!(
            local_calendar_day("2024-06-10T00:00:00Z", -360).unwrap(),
            ymd(2024, 6, 9)
        );
    }

    #[test]
    fn garbage_is_an_invalid_date() {
        assert_eq!(
            local_calendar_day("not-a-date", 0),
            Err(ScheduleError::InvalidDate("not-a-date".into()))
        );
    }

    #[test]
    fn month_shift_clamps_to_short_months() {
        assert_eq!(shift_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_months(ymd(2023, 1, 31), 1), ymd(2023, 2, 28));
        assert_eq!(shift_months(ymd(2024, 10, 31), 1), ymd(2024, 11, 30));
        assert_eq!(shift_months(ymd(2024, 11, 15), 2), ymd(2025, 1, 15));
    }

    #[test]
    fn year_shift_clamps_leap_day() {
        assert_eq!(shift_years(ymd(2024, 2, 29), 1), ymd(2025, 2, 28));
        assert_eq!(shift_years(ymd(2024, 2, 29), 4), ymd(2028, 2, 29));
    }

    #[test]
    fn days_in_month_handles_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
