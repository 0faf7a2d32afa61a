use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, location::DBLocationCreate};
use entity::location::{ActiveModel as LocationActive, Column, Entity as Location, Model as LocationModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_location(&self, payload: DBLocationCreate) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        Location::insert(LocationActive {
            id: Set(id),
            user_id: Set(payload.user_id),
            latitude: Set(payload.latitude),
            longitude: Set(payload.longitude),
            timestamp: Set(payload.timestamp),
        })
        .exec(&self.db)
        .await?;

        Ok(id)
    }

    /// Oldest first. An unknown user id is an empty list, not an error.
    pub async fn list_locations_for_user(&self, user_id: Uuid) -> Result<Vec<LocationModel>, AppError> {
        Ok(Location::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Timestamp)
            .all(&self.db)
            .await?)
    }
}
