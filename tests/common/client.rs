use actix_web::{web, App};
use geotrack::{
    db::postgres_service::PostgresService,
    utils::token::TokenService,
};
use std::sync::Arc;

use super::TEST_SECRET;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub tokens: TokenService,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            tokens: TokenService::new(TEST_SECRET),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.tokens.clone()))
            .configure(geotrack::routes::configure_routes)
    }
}
