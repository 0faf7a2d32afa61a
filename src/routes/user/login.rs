use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Identity;
use crate::types::user::{RUserLogin, UserLoginRes};
use crate::utils::password::verify_password;
use crate::utils::token::TokenService;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::warn;

#[post("")]
pub async fn login(
    db: web::Data<Arc<PostgresService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserLoginRes> {
    let invalid = || AppError::BadRequest("Invalid credentials".to_string());

    let Some(user) = db.find_user_by_email(&body.email).await? else {
        warn!("login failed: unknown email");
        return Err(invalid());
    };

    let matches = verify_password(&body.password, &user.password)
        .map_err(|e| AppError::Internal(format!("stored hash for {} unreadable: {e}", user.id)))?;
    if !matches {
        warn!(id = %user.id, "login failed: password mismatch");
        return Err(invalid());
    }

    let token = tokens.issue(&Identity::new(user.id, user.role))?;

    Ok(ApiResponse::Ok(UserLoginRes { token }))
}
