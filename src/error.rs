use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("No hay productos disponibles")]
    NoProductosDisponibles,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, message) = match self {
            AppError::NoProductosDisponibles => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "No hay productos disponibles".to_string(),
            ),
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (actix_web::http::StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::NotFound(msg) => {
                (actix_web::http::StatusCode::NOT_FOUND, msg.clone())
            }
            AppError::DatabaseError(err) => {
                // 存储层细节只进日志, 不外泄给调用方
                log::error!("Database error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NoProductosDisponibles.error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ValidationError("nombre requerido".into())
                .error_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Producto no encontrado".into())
                .error_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InternalError("boom".into()).error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::DatabaseError(sea_orm::DbErr::Custom("x".into()))
                .error_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
