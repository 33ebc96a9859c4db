//! # Blog Backend
//!
//! 이메일/비밀번호 가입과 JWT 액세스/리프레시 토큰 인증을 제공하는 블로그 백엔드입니다.
//!
//! ```text
//! handlers ─► services ─► repositories ─► MongoDB / memory
//!    ▲            │
//! middlewares     └─► TokenCodec (HS256)
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
