//! In-memory activity store.
//!
//! The registry is the only shared mutable state of the service. Every
//! mutation runs check-then-write under one write lock, so the system-wide
//! membership check in [`ActivityRegistry::add_participant`] always sees a
//! consistent snapshot.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{RegistrationError, SeedError};
use crate::models::{Activity, ActivityCatalog};

pub struct ActivityRegistry {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityRegistry {
    /// Build a registry from seed records.
    ///
    /// Rejects seeds that already break the membership rules: a zero capacity,
    /// or an email listed twice anywhere in the catalog. A repeated activity
    /// name keeps the first record.
    pub fn from_seed(seed: Vec<Activity>) -> Result<Self, SeedError> {
        let mut activities: Vec<Activity> = Vec::with_capacity(seed.len());
        let mut holders: HashMap<String, String> = HashMap::new();

        for activity in seed {
            if activities.iter().any(|a| a.name == activity.name) {
                continue;
            }
            if activity.max_participants == 0 {
                return Err(SeedError::ZeroCapacity(activity.name));
            }
            for email in &activity.participants {
                if let Some(first) = holders.insert(email.clone(), activity.name.clone()) {
                    return Err(SeedError::DuplicateParticipant {
                        email: email.clone(),
                        first,
                        second: activity.name.clone(),
                    });
                }
            }
            activities.push(activity);
        }

        Ok(Self {
            activities: RwLock::new(activities),
        })
    }

    pub fn snapshot(&self) -> ActivityCatalog {
        ActivityCatalog {
            activities: self.activities.read().clone(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities
            .read()
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    /// Name of the activity currently holding `email`, if any.
    pub fn activity_of(&self, email: &str) -> Option<String> {
        self.activities
            .read()
            .iter()
            .find(|a| a.has_participant(email))
            .map(|a| a.name.clone())
    }

    pub fn activity_names(&self) -> Vec<String> {
        self.activities
            .read()
            .iter()
            .map(|a| a.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Append `email` to the roster of `activity_name`.
    ///
    /// Fails when the activity is unknown or when `email` is already on any
    /// roster, this one included.
    pub fn add_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), RegistrationError> {
        let mut activities = self.activities.write();

        let index = activities
            .iter()
            .position(|a| a.name == activity_name)
            .ok_or_else(|| RegistrationError::ActivityNotFound(activity_name.to_string()))?;

        if let Some(holder) = activities.iter().find(|a| a.has_participant(email)) {
            return Err(RegistrationError::AlreadyRegistered {
                activity: holder.name.clone(),
                email: email.to_string(),
            });
        }

        activities[index].participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster of `activity_name`.
    ///
    /// Membership of a different activity does not count.
    pub fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), RegistrationError> {
        let mut activities = self.activities.write();

        let activity = activities
            .iter_mut()
            .find(|a| a.name == activity_name)
            .ok_or_else(|| RegistrationError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistrationError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
#[path = "activity_registry_tests.rs"]
mod tests;
