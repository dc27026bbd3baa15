use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "DSSC Clinic";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key for the persisted student profile.
pub const PROFILE_KEY: &str = "dssc_profile";

/// Storage key for the persisted appointment collection.
pub const APPOINTMENTS_KEY: &str = "dssc_appointments";

/// Appointments within this many days of today trigger a reminder.
pub const REMINDER_WINDOW_DAYS: i64 = 2;

/// Get the application data directory
/// ~/DsscClinic/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("DsscClinic")
}

/// Get the path of the local key-value store database
pub fn store_path() -> PathBuf {
    app_data_dir().join("clinic.db")
}

/// Default log filter when RUST_LOG is not set
pub fn default_log_filter() -> String {
    "info,dssc_clinic=debug".to_string()
}
