//! Pure validation predicates for untrusted form input.
//!
//! All functions are deterministic and side-effect free; the UI layer is
//! responsible for surfacing failures to the user.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

/// `local@domain.tld` shape: non-space, non-@ runs around '@' and '.'.
/// No further domain/TLD validation.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional leading '+', then at least 10 characters drawn from digits,
/// spaces, hyphens, and parentheses. Matched against the full string.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap());

/// Whether `s` has a plausible email shape.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// Whether `s` has a plausible phone-number shape.
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_PATTERN.is_match(s)
}

/// Whether `date` is today or later. Compared as calendar dates, so a
/// date equal to today counts as valid.
pub fn is_date_today_or_later(date: NaiveDate) -> bool {
    date >= Local::now().date_naive()
}

/// Whether every required field value is non-empty after trimming.
pub fn all_required_filled<'a>(values: impl IntoIterator<Item = &'a str>) -> bool {
    values.into_iter().all(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    // ── email ───────────────────────────────────────────

    #[test]
    fn accepts_plain_email() {
        assert!(is_valid_email("juan.delacruz@dssc.edu.ph"));
    }

    #[test]
    fn rejects_email_without_at() {
        assert!(!is_valid_email("bad-email"));
    }

    #[test]
    fn rejects_email_without_tld_dot() {
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn rejects_email_with_spaces() {
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn rejects_empty_email() {
        assert!(!is_valid_email(""));
    }

    // ── phone ───────────────────────────────────────────

    #[test]
    fn accepts_international_phone() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
    }

    #[test]
    fn accepts_local_digits_only() {
        assert!(is_valid_phone("09123456789"));
    }

    #[test]
    fn rejects_short_phone() {
        assert!(!is_valid_phone("123"));
    }

    #[test]
    fn rejects_phone_with_letters() {
        assert!(!is_valid_phone("0912abc6789x"));
    }

    #[test]
    fn plus_must_be_leading() {
        assert!(!is_valid_phone("0912+345678901"));
    }

    // ── date ────────────────────────────────────────────

    #[test]
    fn today_counts_as_valid() {
        assert!(is_date_today_or_later(Local::now().date_naive()));
    }

    #[test]
    fn tomorrow_is_valid() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        assert!(is_date_today_or_later(tomorrow));
    }

    #[test]
    fn yesterday_is_rejected() {
        let yesterday = Local::now().date_naive() - Duration::days(1);
        assert!(!is_date_today_or_later(yesterday));
    }

    // ── required fields ─────────────────────────────────

    #[test]
    fn all_filled_passes() {
        assert!(all_required_filled(["General Checkup", "2030-01-01", "09:00"]));
    }

    #[test]
    fn whitespace_only_field_fails() {
        assert!(!all_required_filled(["General Checkup", "   ", "09:00"]));
    }

    #[test]
    fn empty_iterator_passes() {
        assert!(all_required_filled(std::iter::empty::<&str>()));
    }
}
