//! Authentication HTTP Handlers
//!
//! - `POST /api/login` - 이메일/비밀번호 로그인, 토큰 쌍 발급
//! - `GET /api/me` - 현재 인증된 사용자 정보
use actix_web::{HttpResponse, get, post, web};

use crate::core::AppState;
use crate::domain::dto::users::{LoginRequest, MeResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;

/// 로컬 로그인 핸들러
///
/// 로그인에 성공하면 새 리프레시 토큰이 저장되고, 이전 리프레시 토큰은 무효가 됩니다.
///
/// # Endpoint
/// `POST /api/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.verify_password(&payload).await?;

    log::info!("로컬 로그인 - 사용자: {}, ID: {}", user.email, user.id);

    let token_pair = state.token_refresh_service.issue_token_pair(&user).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

/// 현재 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /api/me` (Bearer 인증 필요)
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MeResponse {
        username: user.username,
        authorities: user.authorities,
    }))
}
