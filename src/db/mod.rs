pub mod location;
pub mod postgres_service;
pub mod user;
