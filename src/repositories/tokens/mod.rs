//! 리프레시 토큰 저장소
//!
//! 사용자당 하나의 리프레시 토큰을 보관합니다. 저장은 사용자 ID 기준 upsert이므로
//! 이전 토큰은 즉시 조회되지 않게 됩니다.

pub mod in_memory;
pub mod refresh_token_repo;

use async_trait::async_trait;

use crate::domain::entities::tokens::RefreshToken;
use crate::errors::AppResult;

pub use in_memory::InMemoryRefreshTokenStore;
pub use refresh_token_repo::RefreshTokenRepository;

/// 토큰 값으로 조회 실패 시 사용하는 메시지
pub const UNEXPECTED_TOKEN: &str = "Unexpected token";

#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 토큰 값이 정확히 일치하는 레코드를 찾습니다.
    ///
    /// 없으면 `AppError::NotFound("Unexpected token")`.
    async fn find_by_token(&self, refresh_token: &str) -> AppResult<RefreshToken>;

    /// 사용자의 리프레시 토큰을 저장합니다. 기존 레코드는 교체됩니다.
    async fn save(&self, user_id: i64, refresh_token: &str) -> AppResult<RefreshToken>;

    /// 사용자의 레코드를 삭제합니다. 레코드가 없어도 성공입니다.
    async fn delete_by_identity(&self, user_id: i64) -> AppResult<()>;
}
