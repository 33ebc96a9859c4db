//! HS256 JWT 인코딩/디코딩 코덱
//!
//! 토큰의 서명, 서명 검증, 만료 확인만 담당합니다. 어떤 클레임을 넣을지,
//! 어떤 수명을 줄지는 상위 서비스([`AccessTokenIssuer`](super::AccessTokenIssuer))가 결정합니다.
//!
//! 만료 판정은 초 단위이며 배타적입니다. `now >= exp` 이면 만료입니다.
//! 시간은 [`Clock`]을 통해 주입되므로 테스트에서 고정할 수 있습니다.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::models::token::token::{Claims, REGISTERED_CLAIMS};

/// 코덱 수준의 토큰 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 구조적으로 해석할 수 없는 토큰
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    /// 추가 클레임을 JSON 객체로 표현할 수 없음
    #[error("Token encoding error: {0}")]
    Encoding(String),
}

/// 초 단위 현재 시각 제공자
pub trait Clock: Send + Sync {
    /// Unix timestamp (초)
    fn now(&self) -> i64;
}

/// 시스템 시계 (`chrono::Utc`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// 테스트용 고정 시계. `advance`로 시간을 앞으로 옮길 수 있습니다.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(by.num_seconds(), Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// HS256 토큰 코덱
#[derive(Clone)]
pub struct TokenCodec {
    clock: Arc<dyn Clock>,
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCodec {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// 서명된 토큰을 생성합니다.
    ///
    /// `iat = now`, `exp = now + expiry` 이며, 추가 클레임은 모두 payload에 그대로 들어갑니다.
    ///
    /// # Errors
    ///
    /// 추가 클레임이 JSON 객체가 아니거나, 직렬화할 수 없거나,
    /// 등록 클레임(`sub`, `iss`, `iat`, `exp`)과 이름이 겹치면 [`TokenError::Encoding`].
    pub fn encode<T: Serialize + ?Sized>(
        &self,
        subject: &str,
        extra_claims: &T,
        issuer: &str,
        secret_key: &str,
        expiry: Duration,
    ) -> Result<String, TokenError> {
        let extra = match serde_json::to_value(extra_claims) {
            Ok(Value::Object(map)) => map,
            Ok(Value::Null) => serde_json::Map::new(),
            Ok(other) => {
                return Err(TokenError::Encoding(format!(
                    "extra claims must be a JSON object, got {}",
                    json_kind(&other)
                )));
            }
            Err(e) => return Err(TokenError::Encoding(e.to_string())),
        };

        if let Some(reserved) = extra.keys().find(|k| REGISTERED_CLAIMS.contains(&k.as_str())) {
            return Err(TokenError::Encoding(format!(
                "extra claim '{}' collides with a registered claim",
                reserved
            )));
        }

        let iat = self.clock.now();
        let claims = Claims {
            sub: subject.to_string(),
            iss: issuer.to_string(),
            iat,
            exp: iat + expiry.num_seconds(),
            extra,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret_key.as_bytes()),
        )
        .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// 서명을 검증하고 클레임을 반환합니다.
    ///
    /// 서명 불일치는 [`TokenError::InvalidSignature`], `now >= exp`는 [`TokenError::Expired`],
    /// 그 외 해석 실패는 [`TokenError::Malformed`]입니다.
    pub fn decode(&self, token: &str, secret_key: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 주입된 시계로 직접 확인
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::new();

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret_key.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(e.to_string()),
        })?;

        if self.clock.now() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    pub fn is_valid(&self, token: &str, secret_key: &str) -> bool {
        self.decode(token, secret_key).is_ok()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
