use std::sync::Arc;

use crate::database::ActivityRegistry;

/// Handle to the registry shared by all request handlers.
pub type SharedRegistry = Arc<ActivityRegistry>;
