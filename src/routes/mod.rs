//! 라우트 구성
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET | `/health` | - |
//! | POST | `/api/user` | - |
//! | POST | `/api/login` | - |
//! | POST | `/api/token` | - |
//! | DELETE | `/api/refresh-token` | Bearer |
//! | GET | `/api/me` | Bearer |

use actix_web::{HttpResponse, error, web};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .service(handlers::users::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::me)
            .service(handlers::token_handlers::create_new_access_token)
            .service(handlers::token_handlers::delete_refresh_token),
    );
}

/// 잘못된 JSON 본문을 `{"error": ...}` 형태의 400 응답으로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
            other => other.to_string(),
        };
        AppError::ValidationError(message).into()
    })
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blog_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
