//! 프로세스 전역 애플리케이션 설정
//!
//! 서버 시작 시 [`AppConfig::init`]으로 한 번 적재되며, 이후에는
//! 같은 `&'static` 참조만 돌려줍니다.

use once_cell::sync::OnceCell;

use crate::config::auth_config::JwtProperties;
use crate::config::data_config::{DatabaseConfig, Environment, ServerConfig};

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtProperties,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtProperties::from_env(),
        }
    }

    /// 환경 변수로부터 설정을 적재합니다. 두 번째 호출부터는 기존 값을 반환합니다.
    pub fn init() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            let config = Self::from_env();
            log::info!(
                "Configuration loaded (environment: {:?}, storage: {:?}, issuer: {})",
                config.environment,
                config.database.backend,
                config.jwt.issuer
            );
            config
        })
    }
}
