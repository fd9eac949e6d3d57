use tracing::{debug, info};

use crate::database::ActivityRegistry;
use crate::error::RegistrationError;
use crate::models::{ActivityCatalog, RegistrationMessage};

pub fn list_activities(registry: &ActivityRegistry) -> ActivityCatalog {
    let catalog = registry.snapshot();
    debug!(activities = catalog.len(), "listed activities");
    catalog
}

/// Enroll `email` in `activity_name`.
///
/// A student holds at most one membership across the whole catalog, so this
/// fails if `email` is on any roster, not only the target one.
pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<RegistrationMessage, RegistrationError> {
    registry.add_participant(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "student signed up");
    Ok(RegistrationMessage {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<RegistrationMessage, RegistrationError> {
    registry.remove_participant(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(RegistrationMessage {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}

#[cfg(test)]
#[path = "activities_service_tests.rs"]
mod tests;
