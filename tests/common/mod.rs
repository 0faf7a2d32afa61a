use geotrack::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

/// Registers `$user` then logs in through the HTTP surface, yielding the bearer token.
macro_rules! register_and_login {
    ($app:expr, $user:expr) => {{
        let user: &geotrack::types::user::RUserRegister = $user;
        let req = actix_web::test::TestRequest::post()
            .uri("/register")
            .set_json(user)
            .to_request();
        let resp = actix_web::test::call_service($app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let req = actix_web::test::TestRequest::post()
            .uri("/login")
            .set_json(crate::common::test_data::login_for(user))
            .to_request();
        let resp = actix_web::test::call_service($app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body: geotrack::types::user::UserLoginRes = actix_web::test::read_body_json(resp).await;
        body.token
    }};
}

pub mod client;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use geotrack::config::AdminConfig;
    use geotrack::types::user::{RUserLogin, RUserRegister};

    pub fn sample_user() -> RUserRegister {
        sample_user_with_email("test@example.com")
    }

    pub fn sample_user_with_email(email: &str) -> RUserRegister {
        RUserRegister {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
        }
    }

    pub fn login_for(user: &RUserRegister) -> RUserLogin {
        RUserLogin {
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }

    pub fn admin() -> AdminConfig {
        AdminConfig::default()
    }
}
