//! 액세스 토큰 발급 및 인증 주체 해석 서비스
//!
//! 사용자 정보로 서명된 토큰을 만들고, 요청에 담겨 온 토큰을
//! [`AuthenticatedUser`]로 되돌립니다. 서명/만료 판정은 [`TokenCodec`]이 담당합니다.

use chrono::Duration;
use serde_json::json;

use crate::config::JwtProperties;
use crate::domain::entities::users::{ROLE_USER, User};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::Claims;
use crate::errors::AppError;
use crate::services::auth::token_codec::{TokenCodec, TokenError};

/// 사용자 ID를 담는 추가 클레임 이름
pub const USER_ID_CLAIM: &str = "id";

/// 액세스/리프레시 토큰 발급자
///
/// 발급자와 비밀키는 생성 시 주입된 [`JwtProperties`]를 사용합니다.
#[derive(Clone)]
pub struct AccessTokenIssuer {
    codec: TokenCodec,
    props: JwtProperties,
}

impl AccessTokenIssuer {
    pub fn new(codec: TokenCodec, props: JwtProperties) -> Self {
        Self { codec, props }
    }

    pub fn properties(&self) -> &JwtProperties {
        &self.props
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// 사용자를 위한 액세스 토큰 생성
    ///
    /// subject는 사용자 이메일, 추가 클레임 `id`는 사용자 ID입니다.
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자
    /// * `lifetime` - 토큰 수명
    ///
    /// # Errors
    ///
    /// * `AppError::TokenIssuance` - 클레임 인코딩 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = issuer.issue_access_token(&user, Duration::hours(2))?;
    /// ```
    pub fn issue_access_token(&self, user: &User, lifetime: Duration) -> Result<String, AppError> {
        self.issue(user, lifetime)
    }

    /// 리프레시 토큰 생성
    ///
    /// 액세스 토큰과 같은 클레임을 가지며 수명만 다릅니다.
    pub fn issue_refresh_token(&self, user: &User, lifetime: Duration) -> Result<String, AppError> {
        self.issue(user, lifetime)
    }

    fn issue(&self, user: &User, lifetime: Duration) -> Result<String, AppError> {
        self.codec
            .encode(
                user.username(),
                &json!({ USER_ID_CLAIM: user.id }),
                &self.props.issuer,
                &self.props.secret_key,
                lifetime,
            )
            .map_err(|e| AppError::TokenIssuance(e.to_string()))
    }

    /// 토큰을 검증하고 클레임을 반환합니다. 코덱 에러를 그대로 돌려줍니다.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.codec.decode(token, &self.props.secret_key)
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.codec.is_valid(token, &self.props.secret_key)
    }

    /// 토큰으로부터 인증 주체를 만듭니다.
    ///
    /// 사용자명은 subject, 권한은 `ROLE_USER`, 원본 토큰은 credential로 보관됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - 서명 불일치, 만료, 형식 오류 (구분하지 않음)
    pub fn resolve_identity(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims = self.decode(token).map_err(|e| {
            log::debug!("Rejected access token: {}", e);
            AppError::Unauthenticated("유효하지 않은 토큰입니다".to_string())
        })?;

        Ok(AuthenticatedUser {
            username: claims.sub,
            authorities: vec![ROLE_USER.to_string()],
            credential: token.to_string(),
        })
    }

    /// 토큰의 `id` 클레임을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - 토큰이 유효하지 않거나 `id`가 없거나 정수가 아님
    pub fn extract_user_id(&self, token: &str) -> Result<i64, AppError> {
        let claims = self.decode(token).map_err(|e| {
            log::debug!("Cannot read user id from token: {}", e);
            AppError::Unauthenticated("유효하지 않은 토큰입니다".to_string())
        })?;

        claims
            .claim_i64(USER_ID_CLAIM)
            .ok_or_else(|| AppError::Unauthenticated("토큰에 사용자 ID가 없습니다".to_string()))
    }
}

/// Bearer 토큰에서 실제 토큰 부분 추출
///
/// HTTP Authorization 헤더의 `Bearer {token}` 형식에서 토큰 부분만을 추출합니다.
///
/// # Errors
///
/// * `AppError::Unauthenticated` - 접두사가 없거나 토큰이 비어 있음
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AppError> {
    match auth_header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AppError::Unauthenticated(
            "유효하지 않은 인증 헤더 형식입니다".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::token_codec::FixedClock;
    use std::sync::Arc;

    const NOW: i64 = 1_700_000_000;

    fn issuer_at(now: i64) -> (AccessTokenIssuer, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(now));
        let codec = TokenCodec::with_clock(clock.clone());
        let props = JwtProperties::new("blog-test", "issuer-secret");
        (AccessTokenIssuer::new(codec, props), clock)
    }

    fn user() -> User {
        User::new(1, "user@example.com".to_string(), "hash".to_string())
    }

    #[test]
    fn test_issued_token_resolves_to_subject() {
        let (issuer, _) = issuer_at(NOW);
        let token = issuer.issue_access_token(&user(), Duration::hours(2)).unwrap();

        let principal = issuer.resolve_identity(&token).unwrap();
        assert_eq!(principal.username, "user@example.com");
        assert_eq!(principal.authorities, vec!["ROLE_USER".to_string()]);
        assert_eq!(principal.credential, token);
    }

    #[test]
    fn test_token_carries_issuer_and_id_claim() {
        let (issuer, _) = issuer_at(NOW);
        let token = issuer.issue_access_token(&user(), Duration::hours(2)).unwrap();

        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.iss, "blog-test");
        assert_eq!(claims.exp - claims.iat, 7200);
        assert_eq!(issuer.extract_user_id(&token).unwrap(), 1);
    }

    #[test]
    fn test_resolve_fails_once_lifetime_elapsed() {
        let (issuer, clock) = issuer_at(NOW);
        let token = issuer.issue_access_token(&user(), Duration::hours(2)).unwrap();

        clock.advance(Duration::hours(2) - Duration::seconds(1));
        assert!(issuer.resolve_identity(&token).is_ok());

        clock.advance(Duration::seconds(1));
        assert!(matches!(
            issuer.resolve_identity(&token),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_foreign_secret_is_unauthenticated() {
        let (issuer, _) = issuer_at(NOW);
        let codec = TokenCodec::with_clock(Arc::new(FixedClock::new(NOW)));
        let foreign = codec
            .encode("user@example.com", &json!({"id": 1}), "blog-test", "other", Duration::hours(1))
            .unwrap();

        assert!(matches!(
            issuer.resolve_identity(&foreign),
            Err(AppError::Unauthenticated(_))
        ));
        assert!(!issuer.is_valid(&foreign));
    }

    #[test]
    fn test_extract_user_id_requires_integer_claim() {
        let (issuer, _) = issuer_at(NOW);
        let props = issuer.properties().clone();
        let token = issuer
            .codec()
            .encode("user@example.com", &json!({"id": "1"}), &props.issuer, &props.secret_key, Duration::hours(1))
            .unwrap();

        assert!(matches!(
            issuer.extract_user_id(&token),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_extract_user_id_requires_id_claim() {
        let (issuer, _) = issuer_at(NOW);
        let props = issuer.properties().clone();
        let token = issuer
            .codec()
            .encode("user@example.com", &json!({}), &props.issuer, &props.secret_key, Duration::hours(1))
            .unwrap();

        assert!(issuer.resolve_identity(&token).is_ok());
        assert!(matches!(
            issuer.extract_user_id(&token),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(extract_bearer_token("Bearer ").is_err());
        assert!(extract_bearer_token("bearer abc").is_err());
    }
}
