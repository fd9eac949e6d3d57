use axum::{extract::State, Json};

use crate::models::ActivityCatalog;
use crate::services::activities_service;
use crate::web::state::SharedRegistry;

pub async fn activities_handler(State(registry): State<SharedRegistry>) -> Json<ActivityCatalog> {
    Json(activities_service::list_activities(&registry))
}
