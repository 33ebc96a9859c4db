//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 값은 환경 변수(및 `.env` 프로필 파일)에서 읽으며,
//! 서버 시작 시 한 번 [`AppConfig`]로 고정됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 저장소, 서버, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 발급자, 비밀키, 토큰 수명 설정
//! - [`app_config`] - 위 설정을 묶은 프로세스 전역 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::init();
//! let (host, port) = config.server.bind_address();
//! let lifetime = config.jwt.access_token_lifetime();
//! ```
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `ENVIRONMENT` | `production` |
//! | `HOST` / `PORT` | `0.0.0.0` / `8080` |
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `DATABASE_NAME` | `blog` |
//! | `STORAGE_BACKEND` | `mongo` (`memory` 가능) |
//! | `JWT_ISSUER` | `blog-backend` |
//! | `JWT_SECRET` | 개발용 기본값 (경고 출력) |
//! | `JWT_ACCESS_EXPIRATION_HOURS` | `2` |
//! | `JWT_REFRESH_EXPIRATION_DAYS` | `14` |
//! | `BCRYPT_COST` | 환경별 (4 / 10 / 12) |

pub mod app_config;
pub mod auth_config;
pub mod data_config;

pub use app_config::*;
pub use auth_config::*;
pub use data_config::*;
