use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// One catalog entry. `name` is the registry key and is not part of the wire body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Body of one activity as it appears under its name in `GET /activities`
/// and in seed files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    pub fn details(&self) -> ActivityDetails {
        ActivityDetails {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Owned snapshot of the whole registry, in seed order.
///
/// Serializes as `{ "<name>": { description, schedule, max_participants, participants } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    pub activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.activities.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details())?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::from_details(
            "Chess Club",
            ActivityDetails {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec!["michael@mergington.edu".to_string()],
            },
        )
    }

    #[test]
    fn test_catalog_serializes_keyed_by_name() {
        let catalog = ActivityCatalog {
            activities: vec![chess()],
        };
        let value = serde_json::to_value(&catalog).unwrap();

        let entry = &value["Chess Club"];
        assert_eq!(entry["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(entry["max_participants"], 12);
        assert_eq!(
            entry["participants"],
            serde_json::json!(["michael@mergington.edu"])
        );
        assert!(entry.get("name").is_none());
    }

    #[test]
    fn test_catalog_keeps_seed_order() {
        let mut second = chess();
        second.name = "Art Club".to_string();
        let catalog = ActivityCatalog {
            activities: vec![chess(), second],
        };

        let text = serde_json::to_string(&catalog).unwrap();
        assert!(text.find("Chess Club").unwrap() < text.find("Art Club").unwrap());
    }

    #[test]
    fn test_has_participant_is_exact_match() {
        let activity = chess();
        assert!(activity.has_participant("michael@mergington.edu"));
        assert!(!activity.has_participant("Michael@mergington.edu"));
        assert!(!activity.has_participant(" michael@mergington.edu"));
    }

    #[test]
    fn test_details_participants_default_to_empty() {
        let details: ActivityDetails = serde_json::from_str(
            r#"{"description":"d","schedule":"s","max_participants":3}"#,
        )
        .unwrap();
        assert!(details.participants.is_empty());
    }
}
