use actix_web::{dev::{Payload, ServiceRequest}, http::header, web, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use tracing::{debug, error};

use crate::types::error::AppError;
use crate::utils::token::TokenService;

/// Second space-separated word of the `Authorization` header. The scheme is not checked:
/// `Bearer x`, `bearer x` and `Basic x` all present `x` as the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationToken(pub Option<String>);

impl AuthorizationToken {
    pub fn parse(value: &str) -> Self {
        let token = value.split(' ').nth(1).filter(|t| !t.is_empty());
        Self(token.map(str::to_owned))
    }
}

impl FromRequest for AuthorizationToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map_or(AuthorizationToken(None), AuthorizationToken::parse);
        ready(Ok(token))
    }
}

/// Access middleware body, used with `HttpAuthentication::with_fn`.
///
/// No token is a 401. A token that fails verification is a 403, the same status the role
/// gate returns. On success the [`Identity`](crate::types::token::Identity) is stored in the
/// request extensions.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: AuthorizationToken,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let AuthorizationToken(Some(token)) = credentials else {
        debug!(path = req.path(), "rejected request without token");
        return Err((AppError::Unauthorized.into(), req));
    };

    let Some(tokens) = req.app_data::<web::Data<TokenService>>().cloned() else {
        error!("TokenService missing from app data");
        return Err((AppError::Internal("token service not configured".into()).into(), req));
    };

    match tokens.verify(&token) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            Ok(req)
        }
        Err(err) => {
            debug!(path = req.path(), "rejected invalid token");
            Err((err.into(), req))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::token::{Identity, Role};
    use actix_web::{get, http::StatusCode, test, App, HttpResponse};
    use actix_web_httpauth::middleware::HttpAuthentication;
    use uuid::Uuid;

    const SECRET: &str = "middleware-secret";

    #[get("/whoami")]
    async fn whoami(identity: Identity) -> HttpResponse {
        HttpResponse::Ok().body(identity.id.to_string())
    }

    #[get("/admin-only")]
    async fn admin_only(identity: Identity) -> Result<HttpResponse, AppError> {
        identity.require_admin()?;
        Ok(HttpResponse::Ok().finish())
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(TokenService::new(SECRET)))
                    .service(
                        web::scope("")
                            .wrap(HttpAuthentication::with_fn(validate_token))
                            .service(whoami)
                            .service(admin_only),
                    ),
            )
            .await
        };
    }

    fn bearer(identity: &Identity) -> (&'static str, String) {
        let token = TokenService::new(SECRET).issue(identity).unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = app!();
        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Access Denied");
    }

    #[actix_web::test]
    async fn malformed_token_is_forbidden() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Invalid Token");
    }

    #[actix_web::test]
    async fn token_is_the_second_word_whatever_the_scheme() {
        assert_eq!(AuthorizationToken::parse("Bearer abc").0.as_deref(), Some("abc"));
        assert_eq!(AuthorizationToken::parse("Basic abc").0.as_deref(), Some("abc"));
        assert_eq!(AuthorizationToken::parse("Bearer").0, None);
        assert_eq!(AuthorizationToken::parse("Bearer ").0, None);
        assert_eq!(AuthorizationToken::parse("").0, None);
    }

    #[actix_web::test]
    async fn header_without_token_is_unauthorized() {
        let app = app!();
        for value in ["Bearer", "Bearer ", "abc"] {
            let req = test::TestRequest::get()
                .uri("/whoami")
                .insert_header(("Authorization", value))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{value:?}");
        }
    }

    #[actix_web::test]
    async fn other_schemes_still_present_a_token() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Basic abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let identity = Identity::new(Uuid::new_v4(), Role::User);
        let token = TokenService::new(SECRET).issue(&identity).unwrap();
        for scheme in ["Token", "bearer", "Bearer"] {
            let req = test::TestRequest::get()
                .uri("/whoami")
                .insert_header(("Authorization", format!("{scheme} {token}")))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{scheme}");
        }
    }

    #[actix_web::test]
    async fn token_from_another_secret_is_forbidden() {
        let app = app!();
        let token = TokenService::new("some-other-secret")
            .issue(&Identity::new(Uuid::new_v4(), Role::Admin))
            .unwrap();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn valid_token_attaches_identity() {
        let app = app!();
        let identity = Identity::new(Uuid::new_v4(), Role::User);
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(bearer(&identity))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, identity.id.to_string());
    }

    #[actix_web::test]
    async fn role_gate_rejects_user_and_admits_admin() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(bearer(&Identity::new(Uuid::new_v4(), Role::User)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(test::read_body(resp).await, "Access Denied");

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(bearer(&Identity::new(Uuid::new_v4(), Role::Admin)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
