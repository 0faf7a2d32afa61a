use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Duplicate emails surface as [`AppError::AlreadyExists`] via the unique index.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        let uid = Uuid::new_v4();

        User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(payload.email),
            password: Set(payload.password_hash),
            role: Set(payload.role),
        })
        .exec(&self.db)
        .await?;

        Ok(uid)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(Column::Email)
            .all(&self.db)
            .await?)
    }
}
