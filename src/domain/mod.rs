//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 객체 (User, RefreshToken)
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 요청 단위 모델 (AuthenticatedUser, Claims)
//! ```

pub mod dto;
pub mod entities;
pub mod models;
