//! Token HTTP Handlers
//!
//! - `POST /api/token` - 리프레시 토큰으로 액세스 토큰 재발급
//! - `DELETE /api/refresh-token` - 인증된 사용자의 리프레시 토큰 삭제 (로그아웃)
use actix_web::{HttpResponse, delete, post, web};

use crate::core::AppState;
use crate::domain::dto::tokens::{CreateAccessTokenRequest, CreateAccessTokenResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;

/// 액세스 토큰 재발급 핸들러
///
/// # Endpoint
/// `POST /api/token`
///
/// ```json
/// { "refreshToken": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// # Responses
/// - `201 Created` - `{"accessToken": "..."}`
/// - `400 Bad Request` - 본문 형식 오류
/// - `401 Unauthorized` - 유효하지 않은 리프레시 토큰
#[post("/token")]
pub async fn create_new_access_token(
    state: web::Data<AppState>,
    payload: web::Json<CreateAccessTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let access_token = state
        .token_refresh_service
        .refresh_access_token(&payload.refresh_token)
        .await?;

    Ok(HttpResponse::Created().json(CreateAccessTokenResponse { access_token }))
}

/// 리프레시 토큰 삭제 핸들러
///
/// # Endpoint
/// `DELETE /api/refresh-token` (Bearer 인증 필요)
#[delete("/refresh-token", wrap = "AuthMiddleware::required()")]
pub async fn delete_refresh_token(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.token_refresh_service.delete_refresh_token(&user).await?;

    Ok(HttpResponse::Ok().finish())
}
