use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::location::LocationView;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Identity;
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

#[get("/users/{id}/locations")]
pub async fn list_user_locations(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<Vec<LocationView>> {
    identity.require_admin()?;

    // an unparsable id is reported like any other lookup failure
    let user_id = Uuid::parse_str(&path)
        .map_err(|e| AppError::Internal(format!("user id {:?} unparsable: {e}", path.as_str())))?;

    let locations = db.list_locations_for_user(user_id).await?;

    Ok(ApiResponse::Ok(locations.into_iter().map(LocationView::from).collect()))
}
