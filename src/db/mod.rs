//! MongoDB 연결 관리
//!
//! [`DatabaseConfig`]의 URI로 클라이언트를 만들고 `ping`으로 연결을 확인합니다.
//! 클라이언트는 내부적으로 커넥션 풀을 가지므로 복제해서 공유해도 됩니다.

use log::info;
use mongodb::bson::doc;
use mongodb::{Client, Collection, options::ClientOptions};
use serde::{Deserialize, Serialize};

use crate::config::DatabaseConfig;
use crate::errors::AppError;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 확인합니다.
    ///
    /// # Errors
    ///
    /// URI 파싱 실패 또는 서버에 닿지 않으면 [`AppError::DatabaseError`].
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        client_options.app_name = Some("blog_backend".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync + Serialize + for<'de> Deserialize<'de>,
    {
        self.get_database().collection::<T>(name)
    }
}

/// mongodb 드라이버 에러를 애플리케이션 에러로 변환합니다.
///
/// 중복 키(11000)는 [`AppError::ConflictError`], 나머지는 [`AppError::DatabaseError`].
pub fn map_mongo_error(err: mongodb::error::Error) -> AppError {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000 => {
            AppError::ConflictError(write_error.message.clone())
        }
        _ => AppError::DatabaseError(err.to_string()),
    }
}
