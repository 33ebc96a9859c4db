//! 프로세스 메모리 기반 사용자 저장소

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::UserStore;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
struct Users {
    next_id: i64,
    by_id: HashMap<i64, User>,
}

#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Users>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 해시된 사용자를 그대로 넣습니다. 시퀀스는 해당 ID 이후로 당겨집니다.
    pub fn insert(&self, user: User) -> AppResult<()> {
        let mut users = self.inner.write().map_err(|_| poisoned())?;
        users.next_id = users.next_id.max(user.id);
        users.by_id.insert(user.id, user);
        Ok(())
    }

    /// ID에 해당하는 사용자를 제거합니다.
    pub fn remove(&self, id: i64) -> AppResult<Option<User>> {
        let mut users = self.inner.write().map_err(|_| poisoned())?;
        Ok(users.by_id.remove(&id))
    }
}

fn poisoned() -> AppError {
    AppError::InternalError("user store lock poisoned".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let users = self.inner.read().map_err(|_| poisoned())?;
        Ok(users.by_id.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.inner.read().map_err(|_| poisoned())?;
        Ok(users.by_id.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let mut users = self.inner.write().map_err(|_| poisoned())?;

        if users.by_id.values().any(|u| u.email == email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        users.next_id += 1;
        let user = User::new(users.next_id, email.to_string(), password_hash.to_string());
        users.by_id.insert(user.id, user.clone());

        Ok(user)
    }
}
