use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{http::header::ContentType, HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    /// 200 with a plain-text body.
    Text(&'static str),
    /// 201 with a plain-text body.
    CreatedText(&'static str),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Text(msg) => HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body(msg),
            ApiResponse::CreatedText(msg) => HttpResponse::Created()
                .content_type(ContentType::plaintext())
                .body(msg),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
