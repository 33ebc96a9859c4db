//! # Domain Models
//!
//! 저장되지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 요청 단위 인증 주체와 인증 모드
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;
