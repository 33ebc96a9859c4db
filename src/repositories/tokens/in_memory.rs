//! 프로세스 메모리 기반 리프레시 토큰 저장소
//!
//! 사용자 ID 인덱스와 토큰 값 인덱스를 하나의 `RwLock` 아래에 두어
//! 저장/삭제 시 두 인덱스가 항상 함께 갱신됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{RefreshTokenStore, UNEXPECTED_TOKEN};
use crate::domain::entities::tokens::RefreshToken;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
struct Indexes {
    by_user: HashMap<i64, String>,
    by_token: HashMap<String, i64>,
}

#[derive(Default)]
pub struct InMemoryRefreshTokenStore {
    inner: RwLock<Indexes>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|idx| idx.by_user.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 사용자 ID로 현재 레코드를 조회합니다.
    pub fn find_by_user_id(&self, user_id: i64) -> Option<RefreshToken> {
        let idx = self.inner.read().ok()?;

        idx.by_user
            .get(&user_id)
            .map(|token| RefreshToken::new(user_id, token.clone()))
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("refresh token store lock poisoned".to_string())
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn find_by_token(&self, refresh_token: &str) -> AppResult<RefreshToken> {
        let idx = self.inner.read().map_err(|_| poisoned())?;

        idx.by_token
            .get(refresh_token)
            .map(|user_id| RefreshToken::new(*user_id, refresh_token))
            .ok_or_else(|| AppError::NotFound(UNEXPECTED_TOKEN.to_string()))
    }

    async fn save(&self, user_id: i64, refresh_token: &str) -> AppResult<RefreshToken> {
        let mut idx = self.inner.write().map_err(|_| poisoned())?;

        if let Some(owner) = idx.by_token.get(refresh_token) {
            if *owner != user_id {
                return Err(AppError::ConflictError(
                    "refresh token already belongs to another user".to_string(),
                ));
            }
        }

        if let Some(previous) = idx.by_user.insert(user_id, refresh_token.to_string()) {
            idx.by_token.remove(&previous);
        }
        idx.by_token.insert(refresh_token.to_string(), user_id);

        Ok(RefreshToken::new(user_id, refresh_token))
    }

    async fn delete_by_identity(&self, user_id: i64) -> AppResult<()> {
        let mut idx = self.inner.write().map_err(|_| poisoned())?;

        if let Some(token) = idx.by_user.remove(&user_id) {
            idx.by_token.remove(&token);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_save_then_find_by_token() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(1, "rt-1").await.unwrap();

        let record = store.find_by_token("rt-1").await.unwrap();
        assert_eq!(record, RefreshToken::new(1, "rt-1"));
    }

    #[actix_web::test]
    async fn test_save_replaces_previous_token() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(1, "rt-old").await.unwrap();
        store.save(1, "rt-new").await.unwrap();

        assert!(matches!(
            store.find_by_token("rt-old").await,
            Err(AppError::NotFound(msg)) if msg == UNEXPECTED_TOKEN
        ));
        assert_eq!(store.find_by_token("rt-new").await.unwrap().user_id, 1);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_saving_same_token_twice_is_idempotent() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(1, "rt").await.unwrap();
        store.save(1, "rt").await.unwrap();

        assert_eq!(store.find_by_token("rt").await.unwrap().user_id, 1);
        assert_eq!(store.find_by_user_id(1), Some(RefreshToken::new(1, "rt")));
    }

    #[actix_web::test]
    async fn test_token_owned_by_another_user_conflicts() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(1, "rt").await.unwrap();

        assert!(matches!(store.save(2, "rt").await, Err(AppError::ConflictError(_))));
        assert_eq!(store.find_by_token("rt").await.unwrap().user_id, 1);
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryRefreshTokenStore::new();
        store.delete_by_identity(42).await.unwrap();

        store.save(42, "rt").await.unwrap();
        store.delete_by_identity(42).await.unwrap();
        store.delete_by_identity(42).await.unwrap();

        assert!(store.is_empty());
        assert!(store.find_by_token("rt").await.is_err());
        assert_eq!(store.find_by_user_id(42), None);
    }

    #[test]
    fn test_concurrent_save_and_delete_keep_indexes_in_step() {
        let store = InMemoryRefreshTokenStore::new();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let store = &store;
                scope.spawn(move || {
                    actix_web::rt::System::new().block_on(async move {
                        for round in 0..200 {
                            if (worker + round) % 2 == 0 {
                                let token = format!("rt-{}-{}", worker, round);
                                store.save(1, &token).await.unwrap();
                            } else {
                                store.delete_by_identity(1).await.unwrap();
                            }
                        }
                    });
                });
            }
        });

        let idx = store.inner.read().unwrap();
        assert!(idx.by_user.len() <= 1);
        assert_eq!(idx.by_user.len(), idx.by_token.len());
        if let Some(token) = idx.by_user.get(&1) {
            assert_eq!(idx.by_token.get(token), Some(&1));
        }
    }
}
