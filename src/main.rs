use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use geotrack::bootstrap::seed_admin;
use geotrack::config::EnvConfig;
use geotrack::db::postgres_service::PostgresService;
use geotrack::routes::configure_routes;
use geotrack::utils::token::TokenService;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?,
    );

    seed_admin(&postgres_service, &config.admin)
        .await
        .map_err(io::Error::other)?;

    let tokens = web::Data::new(TokenService::new(&config.jwt_secret));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(tokens.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
