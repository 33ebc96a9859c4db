//! # Domain Entities
//!
//! 저장소에 영속되는 도메인 객체입니다.
//!
//! - [`users`] - 가입한 사용자 (`users` 컬렉션)
//! - [`tokens`] - 사용자별 리프레시 토큰 (`refresh_tokens` 컬렉션)

pub mod tokens;
pub mod users;
