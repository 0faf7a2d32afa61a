use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::token::Role;

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserRegister {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserLoginRes {
    pub token: String,
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// A user as returned to admins. The password hash never leaves the store layer.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<entity::user::Model> for UserView {
    fn from(m: entity::user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            role: m.role,
        }
    }
}
