//! HTTP 핸들러 모듈
//!
//! 핸들러는 `web::Data<AppState>`에서 서비스를 꺼내 호출하고,
//! 실패는 [`AppError`](crate::errors::AppError)로 반환하여 JSON 에러 응답이 되도록 합니다.

pub mod auth;
pub mod token_handlers;
pub mod users;
