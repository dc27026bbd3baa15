//! Appointment booking — invariants, derived views, reminder copy.
//!
//! The book owns the in-memory appointment collection and keeps it in
//! lock-step with the `dssc_appointments` snapshot in the local store: a
//! failed persist rolls back the in-memory append so memory never diverges
//! from what was durably saved.
//!
//! Appointments are immutable after creation and only ever `Pending` —
//! cancellation and status transitions are deliberately not modeled here.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::APPOINTMENTS_KEY;
use crate::db::LocalStore;
use crate::format::{days_until, format_time_12h};
use crate::validation::{all_required_filled, is_date_today_or_later};

// ─── Types ────────────────────────────────────────────────────────────────────

/// Appointment lifecycle state. Bookings start (and currently stay)
/// `Pending`; further variants are an upstream concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Pending,
}

/// One booked appointment. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    /// Service category chosen on the booking form. The core only
    /// enforces non-empty; the form constrains the actual choices.
    #[serde(rename = "type")]
    pub service_type: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub booked_at: NaiveDateTime,
}

/// Raw booking request as supplied by the form layer — untrusted strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub service_type: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("A required field is missing or empty")]
    MissingField,

    #[error("Not a valid calendar date: {0}")]
    InvalidDate(String),

    #[error("Not a valid time of day: {0}")]
    InvalidTime(String),

    #[error("Appointment date is in the past")]
    PastDate,

    #[error("An appointment already exists at that date and time")]
    DuplicateSlot,

    #[error("Failed to persist the appointment collection")]
    Persistence,
}

/// Serialize `NaiveTime` as `HH:MM`, matching the stored snapshot layout.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

// ─── AppointmentBook ──────────────────────────────────────────────────────────

/// Owner of the appointment collection for one session.
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    /// Load the persisted collection, treating absent or malformed stored
    /// data as an empty book.
    pub fn load(store: &LocalStore) -> Self {
        let appointments: Vec<Appointment> = store.load(APPOINTMENTS_KEY, Vec::new());
        tracing::debug!("Loaded {} appointment(s)", appointments.len());
        Self { appointments }
    }

    /// Start from an empty book without touching the store.
    pub fn empty() -> Self {
        Self { appointments: Vec::new() }
    }

    /// Validate and book a new appointment.
    ///
    /// On success the record is appended and the full collection persisted
    /// under `dssc_appointments`. If the persist fails, the append is
    /// rolled back and `Persistence` returned.
    pub fn book(
        &mut self,
        store: &LocalStore,
        request: &AppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        if !all_required_filled([
            request.service_type.as_str(),
            request.date.as_str(),
            request.time.as_str(),
        ]) {
            return Err(BookingError::MissingField);
        }

        let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(request.date.clone()))?;
        let time = NaiveTime::parse_from_str(request.time.trim(), "%H:%M")
            .map_err(|_| BookingError::InvalidTime(request.time.clone()))?;

        // Evaluated at the booking instant only; never re-checked later.
        if !is_date_today_or_later(date) {
            return Err(BookingError::PastDate);
        }

        if self.appointments.iter().any(|a| a.date == date && a.time == time) {
            return Err(BookingError::DuplicateSlot);
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            service_type: request.service_type.trim().to_string(),
            date,
            time,
            status: AppointmentStatus::Pending,
            booked_at: Local::now().naive_local(),
        };

        self.appointments.push(appointment.clone());
        if !store.save(APPOINTMENTS_KEY, &self.appointments) {
            self.appointments.pop();
            return Err(BookingError::Persistence);
        }

        tracing::info!(
            "Booked {} on {} at {}",
            appointment.service_type,
            appointment.date,
            appointment.time.format("%H:%M"),
        );
        Ok(appointment)
    }

    /// All appointments ordered ascending by `(date, time)`. Ties keep
    /// insertion order; the stored order is not mutated.
    pub fn list_sorted(&self) -> Vec<&Appointment> {
        let mut sorted: Vec<&Appointment> = self.appointments.iter().collect();
        sorted.sort_by_key(|a| (a.date, a.time));
        sorted
    }

    /// Appointments whose calendar-day distance from today lies in
    /// `[0, days]`, soonest first.
    pub fn upcoming_within(&self, days: i64) -> Vec<&Appointment> {
        self.list_sorted()
            .into_iter()
            .filter(|a| {
                let diff = days_until(a.date);
                (0..=days).contains(&diff)
            })
            .collect()
    }

    /// Reminder copy for the earliest appointment inside the window, if any.
    pub fn next_reminder_message(&self, days_window: i64) -> Option<String> {
        let upcoming = self.upcoming_within(days_window);
        let next = upcoming.first()?;

        let when = match days_until(next.date) {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {n} days"),
        };
        Some(format!(
            "You have an appointment {} at {} - {}",
            when,
            format_time_12h(next.time),
            next.service_type,
        ))
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
