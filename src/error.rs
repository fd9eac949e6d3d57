//! Error types for registry operations and startup seeding.

use thiserror::Error;

/// Business-rule rejections raised by signup and unregister.
///
/// These are never transient; a rejected call has left the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// No activity with this name exists.
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    /// The student is not on this activity's roster.
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },

    /// The student already holds a membership, in `activity`.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },
}

impl RegistrationError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistrationError::ActivityNotFound(_) | RegistrationError::NotSignedUp { .. }
        )
    }

    /// Client-facing detail text.
    pub fn detail(&self) -> String {
        match self {
            RegistrationError::ActivityNotFound(_) => "Activity not found".to_string(),
            RegistrationError::NotSignedUp { .. } => {
                "Student is not signed up for this activity".to_string()
            }
            RegistrationError::AlreadyRegistered { activity, .. } => {
                format!("Student is already signed up for {}", activity)
            }
        }
    }
}

/// Failures while building the registry at startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Activity {0} must allow at least one participant")]
    ZeroCapacity(String),

    #[error("{email} appears more than once in the seed ({first} and {second})")]
    DuplicateParticipant {
        email: String,
        first: String,
        second: String,
    },
}
