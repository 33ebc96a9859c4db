//! User Entity Implementation
//!
//! 이메일/비밀번호로 가입한 사용자를 표현합니다.
//! 이메일은 고유하며 JWT의 subject(사용자명)로 사용됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 모든 사용자에게 부여되는 기본 권한
pub const ROLE_USER: &str = "ROLE_USER";

/// `users` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 숫자형 사용자 ID (`counters` 시퀀스에서 발급)
    #[serde(rename = "_id")]
    pub id: i64,
    pub email: String,
    /// bcrypt 해시. 응답으로 직렬화되지 않도록 DTO 변환을 거쳐야 합니다.
    pub password_hash: String,
    pub roles: Vec<String>,
    pub created_at: DateTime,
}

impl User {
    pub fn new(id: i64, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
            roles: vec![ROLE_USER.to_string()],
            created_at: DateTime::now(),
        }
    }

    /// 로그인에 사용하는 사용자명 (이메일)
    pub fn username(&self) -> &str {
        &self.email
    }
}
