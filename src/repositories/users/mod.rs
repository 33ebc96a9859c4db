//! 사용자 저장소

pub mod in_memory;
pub mod user_repo;

use async_trait::async_trait;

use crate::domain::entities::users::User;
use crate::errors::AppResult;

pub use in_memory::InMemoryUserStore;
pub use user_repo::UserRepository;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 만들고 숫자 ID를 발급합니다.
    ///
    /// 이메일이 이미 있으면 `AppError::ConflictError`.
    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User>;
}
