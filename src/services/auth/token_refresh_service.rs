//! 리프레시 토큰 기반 액세스 토큰 재발급 서비스
//!
//! ```text
//! Received ─► Decoding ─► Looked-up ─► Reissued ─► Success
//!                │             │            │
//!                └─────────────┴────────────┴──► InvalidRefreshToken
//! ```
//!
//! 실패 원인(만료, 서명 불일치, 저장소에 없음, 사용자 ID 불일치)은 서버 로그에만
//! 남기고, 클라이언트에는 하나의 일반 메시지만 전달합니다.

use std::sync::Arc;

use crate::domain::dto::tokens::TokenPair;
use crate::domain::entities::users::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::{RefreshTokenStore, UserStore};
use crate::services::auth::access_token_issuer::{AccessTokenIssuer, USER_ID_CLAIM};
use crate::services::auth::token_codec::TokenCodec;

pub struct TokenRefreshService {
    codec: TokenCodec,
    issuer: Arc<AccessTokenIssuer>,
    store: Arc<dyn RefreshTokenStore>,
    users: Arc<dyn UserStore>,
}

impl TokenRefreshService {
    pub fn new(
        codec: TokenCodec,
        issuer: Arc<AccessTokenIssuer>,
        store: Arc<dyn RefreshTokenStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            codec,
            issuer,
            store,
            users,
        }
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRefreshToken` - 토큰이 유효하지 않거나, 저장된 토큰과 다르거나,
    ///   토큰의 사용자 ID가 레코드와 다르거나, 사용자가 더 이상 존재하지 않음
    /// * `AppError::DatabaseError` - 저장소에 접근할 수 없음
    /// * `AppError::TokenIssuance` - 새 토큰 서명 실패
    pub async fn refresh_access_token(&self, refresh_token: &str) -> AppResult<String> {
        let secret_key = &self.issuer.properties().secret_key;
        let claims = self.codec.decode(refresh_token, secret_key).map_err(|e| {
            log::warn!("Refresh rejected at decoding: {}", e);
            AppError::InvalidRefreshToken
        })?;

        let record = self
            .store
            .find_by_token(refresh_token)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => {
                    log::warn!("Refresh rejected: token for '{}' is not the stored one", claims.sub);
                    AppError::InvalidRefreshToken
                }
                other => other,
            })?;

        if let Some(claimed_id) = claims.claim(USER_ID_CLAIM) {
            if claimed_id.as_i64() != Some(record.user_id) {
                log::warn!(
                    "Refresh rejected: id claim {} does not match stored user {}",
                    claimed_id,
                    record.user_id
                );
                return Err(AppError::InvalidRefreshToken);
            }
        }

        let user = self.users.find_by_id(record.user_id).await?.ok_or_else(|| {
            log::warn!("Refresh rejected: user {} no longer exists", record.user_id);
            AppError::InvalidRefreshToken
        })?;

        let access_token = self
            .issuer
            .issue_access_token(&user, self.issuer.properties().access_token_lifetime())?;

        log::info!("Access token reissued for user {}", user.id);
        Ok(access_token)
    }

    /// 인증된 호출자의 리프레시 토큰을 삭제합니다 (로그아웃).
    ///
    /// 호출자의 credential(액세스 토큰)에서 사용자 ID를 읽어 해당 레코드를 지웁니다.
    /// 레코드가 이미 없어도 성공입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRefreshToken` - credential에서 사용자 ID를 읽을 수 없음
    pub async fn delete_refresh_token(&self, caller: &AuthenticatedUser) -> AppResult<()> {
        let user_id = self.issuer.extract_user_id(&caller.credential).map_err(|e| {
            log::warn!("Refresh token deletion rejected for '{}': {}", caller.username, e);
            AppError::InvalidRefreshToken
        })?;

        self.store.delete_by_identity(user_id).await?;

        log::info!("Refresh token deleted for user {}", user_id);
        Ok(())
    }

    /// 로그인 시 액세스/리프레시 토큰 쌍을 발급하고 리프레시 토큰을 저장합니다.
    ///
    /// 기존 리프레시 토큰은 교체되어 더 이상 사용할 수 없습니다.
    pub async fn issue_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        let props = self.issuer.properties();
        let access_token = self
            .issuer
            .issue_access_token(user, props.access_token_lifetime())?;
        let refresh_token = self
            .issuer
            .issue_refresh_token(user, props.refresh_token_lifetime())?;

        self.store.save(user.id, &refresh_token).await?;

        log::info!("Token pair issued for user {}", user.id);
        Ok(TokenPair::bearer(
            access_token,
            refresh_token,
            props.access_token_lifetime().num_seconds(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtProperties;
    use crate::repositories::{InMemoryRefreshTokenStore, InMemoryUserStore};
    use crate::services::auth::token_codec::FixedClock;
    use chrono::Duration;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    struct Fixture {
        service: TokenRefreshService,
        issuer: Arc<AccessTokenIssuer>,
        store: Arc<InMemoryRefreshTokenStore>,
        users: Arc<InMemoryUserStore>,
        clock: Arc<FixedClock>,
    }

    fn fixture() -> Fixture {
        let clock = Arc::new(FixedClock::new(NOW));
        let codec = TokenCodec::with_clock(clock.clone());
        let issuer = Arc::new(AccessTokenIssuer::new(
            codec.clone(),
            JwtProperties::new("blog-test", "refresh-secret"),
        ));
        let store = Arc::new(InMemoryRefreshTokenStore::new());
        let users = Arc::new(InMemoryUserStore::new());
        users
            .insert(User::new(1, "user@example.com".to_string(), "hash".to_string()))
            .unwrap();

        Fixture {
            service: TokenRefreshService::new(codec, issuer.clone(), store.clone(), users.clone()),
            issuer,
            store,
            users,
            clock,
        }
    }

    fn user_one() -> User {
        User::new(1, "user@example.com".to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_refresh_issues_access_token_for_stored_user() {
        let f = fixture();
        let refresh = f.issuer.issue_refresh_token(&user_one(), Duration::days(14)).unwrap();
        f.store.save(1, &refresh).await.unwrap();

        let access = f.service.refresh_access_token(&refresh).await.unwrap();

        assert_eq!(f.issuer.extract_user_id(&access).unwrap(), 1);
        let claims = f.issuer.decode(&access).unwrap();
        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp - claims.iat, Duration::hours(2).num_seconds());
    }

    #[actix_web::test]
    async fn test_refresh_with_unstored_token_is_rejected() {
        let f = fixture();
        let refresh = f.issuer.issue_refresh_token(&user_one(), Duration::days(14)).unwrap();

        let result = f.service.refresh_access_token(&refresh).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_refresh_with_expired_token_is_rejected() {
        let f = fixture();
        let refresh = f.issuer.issue_refresh_token(&user_one(), Duration::days(14)).unwrap();
        f.store.save(1, &refresh).await.unwrap();

        f.clock.advance(Duration::days(21));

        assert!(!f.issuer.is_valid(&refresh));
        let result = f.service.refresh_access_token(&refresh).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_refresh_with_mismatched_id_claim_is_rejected() {
        let f = fixture();
        let props = f.issuer.properties().clone();
        let forged = f
            .issuer
            .codec()
            .encode("user@example.com", &json!({"id": 2}), &props.issuer, &props.secret_key, Duration::days(1))
            .unwrap();
        f.store.save(1, &forged).await.unwrap();

        let result = f.service.refresh_access_token(&forged).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_refresh_for_removed_user_is_rejected() {
        let f = fixture();
        let refresh = f.issuer.issue_refresh_token(&user_one(), Duration::days(14)).unwrap();
        f.store.save(1, &refresh).await.unwrap();
        f.users.remove(1).unwrap();

        let result = f.service.refresh_access_token(&refresh).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_delete_removes_callers_record() {
        let f = fixture();
        let pair = f.service.issue_token_pair(&user_one()).await.unwrap();
        let caller = f.issuer.resolve_identity(&pair.access_token).unwrap();

        f.service.delete_refresh_token(&caller).await.unwrap();

        assert!(f.store.is_empty());
        let result = f.service.refresh_access_token(&pair.refresh_token).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_delete_with_unusable_credential_is_rejected() {
        let f = fixture();
        let caller = AuthenticatedUser {
            username: "user@example.com".to_string(),
            authorities: vec!["ROLE_USER".to_string()],
            credential: "garbage".to_string(),
        };

        let result = f.service.delete_refresh_token(&caller).await;
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[actix_web::test]
    async fn test_new_login_rotates_refresh_token() {
        let f = fixture();
        let first = f.service.issue_token_pair(&user_one()).await.unwrap();
        f.clock.advance(Duration::seconds(1));
        let second = f.service.issue_token_pair(&user_one()).await.unwrap();

        assert_ne!(first.refresh_token, second.refresh_token);
        assert_eq!(second.token_type, "Bearer");
        assert_eq!(second.expires_in, 7200);
        assert!(f.service.refresh_access_token(&first.refresh_token).await.is_err());
        assert!(f.service.refresh_access_token(&second.refresh_token).await.is_ok());
    }
}
