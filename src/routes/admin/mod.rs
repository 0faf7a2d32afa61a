pub mod locations;
pub mod users;
