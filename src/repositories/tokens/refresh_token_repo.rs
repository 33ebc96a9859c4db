//! MongoDB `refresh_tokens` 컬렉션 저장소

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{IndexOptions, ReplaceOptions};
use mongodb::{Collection, IndexModel};

use super::{RefreshTokenStore, UNEXPECTED_TOKEN};
use crate::db::{Database, map_mongo_error};
use crate::domain::entities::tokens::RefreshToken;
use crate::errors::{AppError, AppResult};

pub const COLLECTION_NAME: &str = "refresh_tokens";

/// 문서의 `_id`가 사용자 ID이므로 사용자당 한 문서만 존재합니다.
pub struct RefreshTokenRepository {
    collection: Collection<RefreshToken>,
}

impl RefreshTokenRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<RefreshToken>(COLLECTION_NAME),
        }
    }

    /// 토큰 값 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let token_index = IndexModel::builder()
            .keys(doc! { "refresh_token": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("refresh_token_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(token_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    async fn find_by_token(&self, refresh_token: &str) -> AppResult<RefreshToken> {
        self.collection
            .find_one(doc! { "refresh_token": refresh_token })
            .await
            .map_err(map_mongo_error)?
            .ok_or_else(|| AppError::NotFound(UNEXPECTED_TOKEN.to_string()))
    }

    async fn save(&self, user_id: i64, refresh_token: &str) -> AppResult<RefreshToken> {
        let record = RefreshToken::new(user_id, refresh_token);
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { "_id": user_id }, &record)
            .with_options(options)
            .await
            .map_err(|e| {
                log::error!("Failed to save refresh token for user {}: {}", user_id, e);
                map_mongo_error(e)
            })?;

        Ok(record)
    }

    async fn delete_by_identity(&self, user_id: i64) -> AppResult<()> {
        self.collection
            .delete_one(doc! { "_id": user_id })
            .await
            .map_err(|e| {
                log::error!("Failed to delete refresh token for user {}: {}", user_id, e);
                map_mongo_error(e)
            })?;

        Ok(())
    }
}
