//! The dashboard session — explicit owner of profile and appointment
//! state for one browsing context. No ambient singletons: the UI layer
//! holds exactly one of these and routes commands through it.

use std::path::Path;
use std::time::Duration;

use crate::appointments::{Appointment, AppointmentBook, AppointmentRequest, BookingError};
use crate::config::REMINDER_WINDOW_DAYS;
use crate::db::{DatabaseError, LocalStore};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::profile::{Profile, ProfileError, ProfileManager};

/// Delay before the upcoming-appointment reminder is surfaced after a
/// session check (lets the UI finish its initial render first).
const REMINDER_DELAY: Duration = Duration::from_secs(1);

pub struct DashboardSession {
    store: LocalStore,
    profile: ProfileManager,
    appointments: AppointmentBook,
    notifier: Notifier,
}

impl DashboardSession {
    /// Open the store at `path` and load persisted state.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self::from_store(LocalStore::open(path)?))
    }

    /// Session over an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Ok(Self::from_store(LocalStore::open_in_memory()?))
    }

    fn from_store(store: LocalStore) -> Self {
        let profile = ProfileManager::load(&store);
        let appointments = AppointmentBook::load(&store);
        tracing::info!(
            "Session opened for {} with {} appointment(s)",
            profile.current().student_name,
            appointments.len(),
        );
        Self {
            store,
            profile,
            appointments,
            notifier: Notifier::new(),
        }
    }

    // ── Profile commands ─────────────────────────────────

    pub fn profile(&self) -> &Profile {
        self.profile.current()
    }

    /// Validate and persist a full replacement profile.
    pub fn save_profile(&mut self, candidate: Profile) -> Result<(), ProfileError> {
        self.profile.save(&self.store, candidate)
    }

    /// Attach an encoded image payload supplied by the image pipeline.
    pub fn set_profile_picture(&mut self, encoded: String) -> Result<(), ProfileError> {
        self.profile.set_picture(&self.store, encoded)
    }

    pub fn clear_profile_picture(&mut self) -> Result<(), ProfileError> {
        self.profile.clear_picture(&self.store)
    }

    // ── Appointment commands ─────────────────────────────

    /// Validate and book an appointment from raw form input.
    pub fn book_appointment(
        &mut self,
        request: &AppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        self.appointments.book(&self.store, request)
    }

    /// All appointments in display order (ascending date, then time).
    pub fn appointments_sorted(&self) -> Vec<&Appointment> {
        self.appointments.list_sorted()
    }

    /// Appointments inside the reminder window.
    pub fn upcoming_appointments(&self) -> Vec<&Appointment> {
        self.appointments.upcoming_within(REMINDER_WINDOW_DAYS)
    }

    // ── Notifications ────────────────────────────────────

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// What the UI should currently render as a banner, if anything.
    pub fn current_notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    /// If an appointment falls inside the reminder window, schedule its
    /// reminder as a success banner after a short delay. Called once on
    /// session start and again after each booking.
    pub fn check_upcoming_appointments(&self) {
        if let Some(message) = self.appointments.next_reminder_message(REMINDER_WINDOW_DAYS) {
            self.notifier
                .schedule(message, NotificationKind::Success, REMINDER_DELAY);
        }
    }
}

// ─── User-facing error copy ───────────────────────────────────────────────────

impl BookingError {
    /// The banner text the dashboard shows for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            BookingError::MissingField => "Please fill in all required fields.",
            BookingError::InvalidDate(_) => "Please enter a valid date.",
            BookingError::InvalidTime(_) => "Please enter a valid time.",
            BookingError::PastDate => "Please select a future date.",
            BookingError::DuplicateSlot => "You already have an appointment at this time.",
            BookingError::Persistence => "Error booking appointment. Please try again.",
        }
    }
}

impl ProfileError {
    /// The banner text the dashboard shows for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProfileError::MissingField(_) => "Please fill in all required fields.",
            ProfileError::InvalidEmail => "Please enter a valid email address.",
            ProfileError::InvalidPhone => "Please enter a valid phone number.",
            ProfileError::StorageFailed => "Error saving profile. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn test_session() -> DashboardSession {
        DashboardSession::open_in_memory().expect("in-memory session")
    }

    fn request(date: &str, time: &str) -> AppointmentRequest {
        AppointmentRequest {
            service_type: "General Checkup".into(),
            date: date.into(),
            time: time.into(),
        }
    }

    #[test]
    fn fresh_session_has_default_profile_and_no_appointments() {
        let session = test_session();
        assert_eq!(session.profile(), &Profile::default());
        assert!(session.appointments_sorted().is_empty());
    }

    #[test]
    fn booking_through_session_updates_views() {
        let mut session = test_session();
        session.book_appointment(&request("2030-01-01", "09:00")).unwrap();

        let sorted = session.appointments_sorted();
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].service_type, "General Checkup");
    }

    #[test]
    fn duplicate_booking_surfaces_original_copy() {
        let mut session = test_session();
        session.book_appointment(&request("2030-01-01", "09:00")).unwrap();
        let err = session.book_appointment(&request("2030-01-01", "09:00")).unwrap_err();

        assert_eq!(err.user_message(), "You already have an appointment at this time.");
    }

    #[test]
    fn invalid_email_surfaces_original_copy() {
        let mut session = test_session();
        let mut candidate = Profile::default();
        candidate.email = "bad-email".into();

        let err = session.save_profile(candidate).unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid email address.");
    }

    #[test]
    fn profile_picture_attach_and_remove() {
        let mut session = test_session();
        session.set_profile_picture("data:image/png;base64,BBBB".into()).unwrap();
        assert!(session.profile().profile_picture.is_some());

        session.clear_profile_picture().unwrap();
        assert!(session.profile().profile_picture.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_scheduled_for_same_day_appointment() {
        let mut session = test_session();
        let today = Local::now().date_naive().to_string();
        session.book_appointment(&request(&today, "23:00")).unwrap();

        session.check_upcoming_appointments();
        assert!(session.current_notification().is_none(), "Delayed, not immediate");

        tokio::time::sleep(Duration::from_millis(1100)).await;
        let banner = session.current_notification().expect("reminder surfaced");
        assert_eq!(banner.kind, NotificationKind::Success);
        assert!(banner.message.contains("today"));
    }

    #[tokio::test(start_paused = true)]
    async fn no_reminder_without_upcoming_appointments() {
        let mut session = test_session();
        session.book_appointment(&request("2030-06-01", "09:00")).unwrap();

        session.check_upcoming_appointments();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(session.current_notification().is_none());
    }
}
