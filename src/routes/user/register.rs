use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Role;
use crate::types::user::{DBUserCreate, RUserRegister};
use crate::utils::password::hash_password;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::{error, info, warn};

const REGISTER_FAILED: &str = "Error registering user";

#[post("")]
pub async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<()> {
    let body = body.into_inner();

    let password_hash = hash_password(&body.password).map_err(|e| {
        error!("password hashing failed: {e}");
        AppError::BadRequest(REGISTER_FAILED.to_string())
    })?;

    // Every store failure is reported as a 400, duplicate email included.
    match db
        .create_user(DBUserCreate {
            name: body.name,
            email: body.email,
            password_hash,
            role: Role::User,
        })
        .await
    {
        Ok(id) => {
            info!(%id, "registered user");
            Ok(ApiResponse::CreatedText("User registered successfully"))
        }
        Err(e) => {
            warn!(kind = e.kind(), "registration rejected: {e}");
            Err(AppError::BadRequest(REGISTER_FAILED.to_string()))
        }
    }
}
