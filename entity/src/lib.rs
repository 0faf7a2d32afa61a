pub mod location;
pub mod user;

/*
 Users register themselves with role `user`. The single `admin` account is seeded at startup.
 Locations reference a user id but do not belong to the user row: no FK, no cascade.
 */
