//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! - [`auth`] - JWT 코덱, 액세스 토큰 발급, 리프레시 토큰 재발급/삭제
//! - [`users`] - 회원 가입과 비밀번호 인증
//!
//! 서비스는 [`AppState`](crate::core::AppState)에서 생성자 주입으로 조립됩니다.

pub mod auth;
pub mod users;
