//! 리프레시 토큰 레코드
//!
//! 사용자당 하나의 리프레시 토큰만 보관합니다. 문서의 `_id`가 사용자 ID이므로
//! 저장은 항상 기존 레코드를 교체합니다.

use serde::{Deserialize, Serialize};

/// `refresh_tokens` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    #[serde(rename = "_id")]
    pub user_id: i64,
    pub refresh_token: String,
}

impl RefreshToken {
    pub fn new(user_id: i64, refresh_token: impl Into<String>) -> Self {
        Self {
            user_id,
            refresh_token: refresh_token.into(),
        }
    }

}
