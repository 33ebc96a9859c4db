//! MongoDB `users` 컬렉션 저장소
//!
//! 숫자형 사용자 ID는 `counters` 컬렉션의 `{_id: "users"}` 문서에서
//! `$inc`로 원자적으로 발급합니다.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::UserStore;
use crate::db::{Database, map_mongo_error};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

pub const COLLECTION_NAME: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";

/// `counters` 컬렉션 문서 (`_id`는 시퀀스 이름)
#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    seq: i64,
}

pub struct UserRepository {
    users: Collection<User>,
    counters: Collection<Counter>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection::<User>(COLLECTION_NAME),
            counters: db.collection::<Counter>(COUNTERS_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.users
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": COLLECTION_NAME }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await
            .map_err(map_mongo_error)?
            .ok_or_else(|| AppError::DatabaseError("user id counter unavailable".to_string()))?;

        Ok(counter.seq)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_mongo_error)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "email": email })
            .await
            .map_err(map_mongo_error)
    }

    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User> {
        if self.find_by_email(email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let user = User::new(self.next_id().await?, email.to_string(), password_hash.to_string());

        // 동시 가입은 email 유니크 인덱스에서 11000으로 걸러짐
        self.users.insert_one(&user).await.map_err(map_mongo_error)?;

        Ok(user)
    }
}
