use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::RegistrationError;
use crate::models::RegistrationMessage;
use crate::services::activities_service;
use crate::web::state::SharedRegistry;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

type ApiResult = Result<Json<RegistrationMessage>, (StatusCode, Json<Value>)>;

fn rejection(e: RegistrationError) -> (StatusCode, Json<Value>) {
    let status = if e.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(serde_json::json!({ "detail": e.detail() })))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> ApiResult {
    activities_service::signup(&registry, &activity_name, &query.email)
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            rejection(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> ApiResult {
    activities_service::unregister(&registry, &activity_name, &query.email)
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            rejection(e)
        })
}
