use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RLocationSubmit {
    pub latitude: f64,
    pub longitude: f64,
}

pub struct DBLocationCreate {
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<entity::location::Model> for LocationView {
    fn from(m: entity::location::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            latitude: m.latitude,
            longitude: m.longitude,
            timestamp: m.timestamp,
        }
    }
}
