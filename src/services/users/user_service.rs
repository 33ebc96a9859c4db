//! 사용자 가입 및 비밀번호 인증 서비스

use std::sync::Arc;

use bcrypt::{hash, verify};
use validator::Validate;

use crate::domain::dto::users::{AddUserRequest, AddUserResponse, LoginRequest};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::UserStore;

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    /// # Arguments
    ///
    /// * `users` - 사용자 저장소
    /// * `bcrypt_cost` - 해싱 비용 (보통 [`PasswordConfig::bcrypt_cost`](crate::config::PasswordConfig::bcrypt_cost))
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// 입력값 검증 후 비밀번호를 bcrypt로 해싱하여 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일 형식 또는 비밀번호 길이 위반
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    pub async fn register(&self, request: AddUserRequest) -> AppResult<AddUserResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.users.create(&request.email, &password_hash).await?;

        log::info!("User registered: {} (id: {})", user.email, user.id);
        Ok(AddUserResponse::from(&user))
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 에러를 돌려줍니다.
    pub async fn verify_password(&self, request: &LoginRequest) -> AppResult<User> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let is_valid = verify(&request.password, &user.password_hash)
            .with_context(|| format!("비밀번호 검증 실패 (user {})", user.id))?;

        if !is_valid {
            log::warn!("Login failed for {}", request.email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserStore;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserStore::new()), 4)
    }

    fn add(email: &str, password: &str) -> AddUserRequest {
        AddUserRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_then_verify_password() {
        let service = service();
        let created = service.register(add("user@example.com", "password123")).await.unwrap();

        let user = service.verify_password(&login("user@example.com", "password123")).await.unwrap();
        assert_eq!(user.id, created.id);
        assert_ne!(user.password_hash, "password123");
    }

    #[actix_web::test]
    async fn test_register_rejects_invalid_input() {
        let result = service().register(add("nope", "short")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_conflicts() {
        let service = service();
        service.register(add("user@example.com", "password123")).await.unwrap();

        let result = service.register(add("user@example.com", "password456")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let service = service();
        service.register(add("user@example.com", "password123")).await.unwrap();

        let wrong = service.verify_password(&login("user@example.com", "password999")).await;
        let unknown = service.verify_password(&login("ghost@example.com", "password123")).await;

        match (wrong, unknown) {
            (Err(AppError::AuthenticationError(a)), Err(AppError::AuthenticationError(b))) => {
                assert_eq!(a, b)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
