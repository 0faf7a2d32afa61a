use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::location::{DBLocationCreate, RLocationSubmit};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Identity;
use actix_web::{post, web};
use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tracing::{error, info};

#[post("")]
pub async fn submit_location(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLocationSubmit>,
) -> ApiResult<()> {
    let RLocationSubmit { latitude, longitude } = body.into_inner();
    info!(user = %identity.id, "Received location: {latitude}, {longitude}");

    db.create_location(DBLocationCreate {
        user_id: identity.id,
        latitude,
        longitude,
        // postgres keeps microseconds
        timestamp: Utc::now().trunc_subsecs(6),
    })
    .await
    .map_err(|e| {
        error!(user = %identity.id, "saving location failed: {e}");
        AppError::Internal("Error saving location".to_string())
    })?;

    Ok(ApiResponse::Text("Location saved successfully"))
}
