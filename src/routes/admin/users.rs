use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Identity;
use crate::types::user::UserView;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/users")]
pub async fn list_users(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<UserView>> {
    identity.require_admin()?;

    let users = db.list_users().await?;

    Ok(ApiResponse::Ok(users.into_iter().map(UserView::from).collect()))
}
