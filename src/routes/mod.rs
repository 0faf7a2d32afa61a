use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod admin;
pub mod health;
pub mod location;
pub mod user;

/// Missing fields and malformed JSON become a plain-text 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("Invalid request body: {err}")).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth = HttpAuthentication::with_fn(validate_token);

    cfg.app_data(json_config());

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/register").service(user::register::register));
    cfg.service(web::scope("/login").service(user::login::login));
    cfg.service(
        web::scope("/location")
            .service(location::submit::submit_location)
            .wrap(auth.clone())
    );
    cfg.service(
        web::scope("/admin")
            .service(admin::users::list_users)
            .service(admin::locations::list_user_locations)
            .wrap(auth)
    );
}
