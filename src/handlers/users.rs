//! User HTTP Handlers
use actix_web::{HttpResponse, post, web};

use crate::core::AppState;
use crate::domain::dto::users::AddUserRequest;
use crate::errors::AppError;

/// 회원 가입 핸들러
///
/// # Endpoint
/// `POST /api/user`
///
/// ```bash
/// curl -X POST http://localhost:8080/api/user \
///   -H "Content-Type: application/json" \
///   -d '{"email": "newuser@example.com", "password": "SecurePass123"}'
/// ```
///
/// # Responses
/// - `201 Created` - `{"id": 1}`
/// - `400 Bad Request` - 이메일 형식/비밀번호 길이 위반
/// - `409 Conflict` - 이미 가입된 이메일
#[post("/user")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<AddUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
