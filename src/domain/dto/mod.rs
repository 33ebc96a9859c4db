//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 계약입니다. 토큰 관련 필드는 camelCase로 직렬화됩니다.

pub mod tokens;
pub mod users;
