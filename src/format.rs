//! Display formatting for dates and times shown to the user.

use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// Format a time of day in 12-hour notation: "9:00 AM", "2:30 PM".
pub fn format_time_12h(time: NaiveTime) -> String {
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, time.minute(), meridiem)
}

/// Long date: "January 5, 2030".
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short date: "Jan 5, 2030".
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Signed number of calendar days from today until `date`.
/// Same-day is 0, tomorrow is 1, yesterday is -1.
pub fn days_until(date: NaiveDate) -> i64 {
    (date - Local::now().date_naive()).num_days()
}

/// Today as `YYYY-MM-DD`, for the booking form's minimum-date attribute.
pub fn min_booking_date() -> String {
    Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn morning_time() {
        assert_eq!(format_time_12h(t(9, 0)), "9:00 AM");
    }

    #[test]
    fn afternoon_time() {
        assert_eq!(format_time_12h(t(14, 30)), "2:30 PM");
    }

    #[test]
    fn midnight_is_twelve_am() {
        assert_eq!(format_time_12h(t(0, 5)), "12:05 AM");
    }

    #[test]
    fn noon_is_twelve_pm() {
        assert_eq!(format_time_12h(t(12, 0)), "12:00 PM");
    }

    #[test]
    fn long_date_spells_month() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 5).unwrap();
        assert_eq!(format_date_long(date), "January 5, 2030");
    }

    #[test]
    fn short_date_abbreviates_month() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 5).unwrap();
        assert_eq!(format_date_short(date), "Jan 5, 2030");
    }

    #[test]
    fn days_until_today_is_zero() {
        assert_eq!(days_until(Local::now().date_naive()), 0);
    }

    #[test]
    fn days_until_tomorrow_is_one() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        assert_eq!(days_until(tomorrow), 1);
    }

    #[test]
    fn days_until_past_is_negative() {
        let last_week = Local::now().date_naive() - Duration::days(7);
        assert_eq!(days_until(last_week), -7);
    }

    #[test]
    fn min_booking_date_is_iso() {
        let s = min_booking_date();
        assert!(NaiveDate::parse_from_str(&s, "%Y-%m-%d").is_ok());
    }
}
