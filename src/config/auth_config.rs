//! JWT 인증 설정 관리 모듈
//!
//! 토큰 발급자(issuer), 서명 비밀키, 액세스/리프레시 토큰 수명을 관리합니다.
//! 값은 서버 시작 시 한 번 읽혀 [`JwtProperties`]로 고정되며 이후 변경되지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_ISSUER="blog-backend"
//! export JWT_SECRET="$(openssl rand -base64 32)"
//! export JWT_ACCESS_EXPIRATION_HOURS="2"
//! export JWT_REFRESH_EXPIRATION_DAYS="14"
//! ```

use std::env;

use chrono::Duration;

use crate::config::data_config::Environment;

const DEFAULT_ISSUER: &str = "blog-backend";
const DEFAULT_SECRET: &str = "your-secret-key";
const DEFAULT_ACCESS_HOURS: i64 = 2;
const DEFAULT_REFRESH_DAYS: i64 = 14;

/// JWT 서명/검증에 필요한 설정값
///
/// 발급자와 비밀키는 모든 토큰에 공통으로 사용되며,
/// 수명은 액세스 토큰과 리프레시 토큰을 구분합니다.
#[derive(Debug, Clone)]
pub struct JwtProperties {
    pub issuer: String,
    pub secret_key: String,
    pub access_token_hours: i64,
    pub refresh_token_days: i64,
}

impl JwtProperties {
    pub fn new(issuer: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            secret_key: secret_key.into(),
            access_token_hours: DEFAULT_ACCESS_HOURS,
            refresh_token_days: DEFAULT_REFRESH_DAYS,
        }
    }

    /// 환경 변수로부터 JWT 설정을 읽습니다.
    ///
    /// `JWT_SECRET`이 없으면 개발용 기본값을 사용하고 경고를 남깁니다.
    /// 수명 값이 숫자가 아니거나 0 이하이면 기본값(2시간 / 14일)을 사용합니다.
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if Environment::current().is_production() {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            } else {
                log::debug!("JWT_SECRET not set, using development default");
            }
            DEFAULT_SECRET.to_string()
        });

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());

        Self::new(issuer, secret_key).with_lifetimes(
            positive_or(env::var("JWT_ACCESS_EXPIRATION_HOURS").ok(), DEFAULT_ACCESS_HOURS),
            positive_or(env::var("JWT_REFRESH_EXPIRATION_DAYS").ok(), DEFAULT_REFRESH_DAYS),
        )
    }

    pub fn with_lifetimes(mut self, access_token_hours: i64, refresh_token_days: i64) -> Self {
        self.access_token_hours = access_token_hours;
        self.refresh_token_days = refresh_token_days;
        self
    }

    /// 액세스 토큰 수명
    pub fn access_token_lifetime(&self) -> Duration {
        Duration::hours(self.access_token_hours)
    }

    /// 리프레시 토큰 수명
    pub fn refresh_token_lifetime(&self) -> Duration {
        Duration::days(self.refresh_token_days)
    }
}

fn positive_or(raw: Option<String>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
