pub mod error;
pub mod location;
pub mod response;
pub mod token;
pub mod user;
