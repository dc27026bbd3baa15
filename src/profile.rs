//! Student profile — record shape, validation, and persistence.
//!
//! One profile per session. Saves replace the record wholesale after
//! validation; there is no partial merge. The stored snapshot keeps the
//! original camelCase field names under the `dssc_profile` key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PROFILE_KEY;
use crate::db::LocalStore;
use crate::validation::{is_valid_email, is_valid_phone};

/// The student profile record. All declared fields are present in the
/// snapshot even when empty; `#[serde(default)]` fills gaps when loading
/// older or partial stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub student_name: String,
    pub student_id: String,
    pub program: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    /// Opaque encoded image payload supplied by the image pipeline;
    /// stored without interpretation.
    pub profile_picture: Option<String>,
    pub drug_test: bool,
    pub blood_typing: bool,
    pub cvc: bool,
}

impl Default for Profile {
    /// Built-in starter profile shown on first load.
    fn default() -> Self {
        Self {
            student_name: "Juan Dela Cruz".into(),
            student_id: "2021-12345".into(),
            program: "Computer Science".into(),
            department: "Information Technology".into(),
            email: "juan.delacruz@dssc.edu.ph".into(),
            phone: "+63 912 345 6789".into(),
            profile_picture: None,
            drug_test: true,
            blood_typing: true,
            cvc: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Required field '{0}' is missing or empty")]
    MissingField(&'static str),

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Phone number is not valid")]
    InvalidPhone,

    #[error("Failed to persist the profile")]
    StorageFailed,
}

/// Owner of the session's profile record.
pub struct ProfileManager {
    profile: Profile,
}

impl ProfileManager {
    /// Load the persisted profile, or the built-in default if none exists
    /// or the stored data is malformed.
    pub fn load(store: &LocalStore) -> Self {
        let profile = store.load(PROFILE_KEY, Profile::default());
        Self { profile }
    }

    /// The current in-memory profile.
    pub fn current(&self) -> &Profile {
        &self.profile
    }

    /// Validate and persist a full replacement profile.
    ///
    /// On any validation failure nothing is persisted and the in-memory
    /// record is unchanged. On a store failure the in-memory record is
    /// also left unchanged, so memory and store stay consistent.
    pub fn save(&mut self, store: &LocalStore, candidate: Profile) -> Result<(), ProfileError> {
        if candidate.student_name.trim().is_empty() {
            return Err(ProfileError::MissingField("studentName"));
        }
        if candidate.email.trim().is_empty() {
            return Err(ProfileError::MissingField("email"));
        }
        if candidate.phone.trim().is_empty() {
            return Err(ProfileError::MissingField("phone"));
        }
        if !is_valid_email(&candidate.email) {
            return Err(ProfileError::InvalidEmail);
        }
        if !is_valid_phone(&candidate.phone) {
            return Err(ProfileError::InvalidPhone);
        }

        if !store.save(PROFILE_KEY, &candidate) {
            return Err(ProfileError::StorageFailed);
        }

        tracing::info!("Profile saved for {}", candidate.student_name);
        self.profile = candidate;
        Ok(())
    }

    /// Attach an already-encoded image payload to the profile and persist.
    pub fn set_picture(&mut self, store: &LocalStore, encoded: String) -> Result<(), ProfileError> {
        let mut updated = self.profile.clone();
        updated.profile_picture = Some(encoded);
        if !store.save(PROFILE_KEY, &updated) {
            return Err(ProfileError::StorageFailed);
        }
        self.profile = updated;
        Ok(())
    }

    /// Remove the profile picture and persist.
    pub fn clear_picture(&mut self, store: &LocalStore) -> Result<(), ProfileError> {
        let mut updated = self.profile.clone();
        updated.profile_picture = None;
        if !store.save(PROFILE_KEY, &updated) {
            return Err(ProfileError::StorageFailed);
        }
        self.profile = updated;
        Ok(())
    }
}
