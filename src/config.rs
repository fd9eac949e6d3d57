use std::env;
use std::path::PathBuf;

use crate::database::seed;
use crate::error::SeedError;
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `ACTIVITIES_SEED_FILE`. Call after `dotenv()`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.port);
        let seed_file = lookup("ACTIVITIES_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self {
            host,
            port,
            seed_file,
        }
    }

    pub fn seed_activities(&self) -> Result<Vec<Activity>, SeedError> {
        match &self.seed_file {
            Some(path) => seed::load_activities(path),
            None => Ok(seed::default_activities()),
        }
    }
}
