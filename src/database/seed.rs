use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::SeedError;
use crate::models::{Activity, ActivityDetails};

const DEFAULT_SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

/// Built-in catalog used when no seed file is configured.
pub fn default_activities() -> Vec<Activity> {
    DEFAULT_SEED
        .iter()
        .map(
            |(name, description, schedule, max_participants, participants)| Activity {
                name: name.to_string(),
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
        .collect()
}

/// Parse a seed document shaped like the `GET /activities` body.
/// Key order in the document becomes the listing order.
pub fn parse_activities(json: &str) -> Result<Vec<Activity>, SeedError> {
    let doc: Map<String, Value> = serde_json::from_str(json)?;
    let mut out = Vec::with_capacity(doc.len());
    for (name, body) in doc {
        let details: ActivityDetails = serde_json::from_value(body)?;
        out.push(Activity::from_details(name, details));
    }
    Ok(out)
}

pub fn load_activities(path: &Path) -> Result<Vec<Activity>, SeedError> {
    let raw = fs::read_to_string(path)?;
    parse_activities(&raw)
}
