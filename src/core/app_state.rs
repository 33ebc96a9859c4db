//! 애플리케이션 컨테이너
//!
//! 저장소와 서비스를 `main`에서 한 번 조립하여 `web::Data<AppState>`로 공유합니다.
//! 각 서비스는 생성자로 의존성을 받으며 전역 조회는 하지 않습니다.

use std::sync::Arc;

use crate::config::{AppConfig, JwtProperties, PasswordConfig, StorageBackend};
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::{
    InMemoryRefreshTokenStore, InMemoryUserStore, RefreshTokenRepository, RefreshTokenStore,
    UserRepository, UserStore,
};
use crate::services::auth::{AccessTokenIssuer, TokenCodec, TokenRefreshService};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<AccessTokenIssuer>,
    pub token_refresh_service: Arc<TokenRefreshService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(
        codec: TokenCodec,
        jwt: JwtProperties,
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        bcrypt_cost: u32,
    ) -> Self {
        let issuer = Arc::new(AccessTokenIssuer::new(codec.clone(), jwt));
        let token_refresh_service = Arc::new(TokenRefreshService::new(
            codec,
            issuer.clone(),
            refresh_tokens,
            users.clone(),
        ));
        let user_service = Arc::new(UserService::new(users, bcrypt_cost));

        Self {
            issuer,
            token_refresh_service,
            user_service,
        }
    }

    /// 메모리 저장소로 조립합니다. 재시작하면 데이터가 사라집니다.
    pub fn in_memory(codec: TokenCodec, jwt: JwtProperties, bcrypt_cost: u32) -> Self {
        Self::new(
            codec,
            jwt,
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryRefreshTokenStore::new()),
            bcrypt_cost,
        )
    }

    /// 설정에 따라 MongoDB 또는 메모리 저장소로 조립합니다.
    ///
    /// MongoDB인 경우 연결 확인 후 유니크 인덱스를 생성합니다.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        match config.database.backend {
            StorageBackend::Memory => {
                log::warn!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory(TokenCodec::new(), config.jwt.clone(), bcrypt_cost))
            }
            StorageBackend::Mongo => {
                let db = Database::connect(&config.database).await?;

                let users = UserRepository::new(&db);
                users.create_indexes().await?;
                let refresh_tokens = RefreshTokenRepository::new(&db);
                refresh_tokens.create_indexes().await?;

                Ok(Self::new(
                    TokenCodec::new(),
                    config.jwt.clone(),
                    Arc::new(users),
                    Arc::new(refresh_tokens),
                    bcrypt_cost,
                ))
            }
        }
    }
}
