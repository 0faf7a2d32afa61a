use tracing::info;

use crate::config::AdminConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, token::Role, user::DBUserCreate};
use crate::utils::password::hash_password;

/// Makes sure the configured admin account exists. Returns `true` if it was created by this call.
///
/// Safe to run any number of times, including from several processes at once: losing the
/// insert race on the unique email index counts as "already exists".
pub async fn seed_admin(db: &PostgresService, admin: &AdminConfig) -> Result<bool, AppError> {
    if db.find_user_by_email(&admin.email).await?.is_some() {
        info!(email = %admin.email, "Admin user already exists");
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::Internal(format!("hashing admin password: {e}")))?;

    match db
        .create_user(DBUserCreate {
            name: admin.name.clone(),
            email: admin.email.clone(),
            password_hash,
            role: Role::Admin,
        })
        .await
    {
        Ok(id) => {
            info!(email = %admin.email, %id, "Admin user created successfully");
            Ok(true)
        }
        Err(AppError::AlreadyExists) => {
            info!(email = %admin.email, "Admin user already exists");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
