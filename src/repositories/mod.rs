//! # Repositories
//!
//! 저장소 계층은 trait([`tokens::RefreshTokenStore`], [`users::UserStore`])과
//! 그 구현(MongoDB, 메모리)으로 나뉩니다. 서비스는 trait 객체만 의존합니다.

pub mod tokens;
pub mod users;

pub use tokens::{InMemoryRefreshTokenStore, RefreshTokenRepository, RefreshTokenStore};
pub use users::{InMemoryUserStore, UserRepository, UserStore};
