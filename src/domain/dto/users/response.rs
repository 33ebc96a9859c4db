use serde::Serialize;

use crate::domain::entities::users::User;

/// 회원 가입 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct AddUserResponse {
    pub id: i64,
}

/// 현재 인증된 사용자 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub authorities: Vec<String>,
}

impl From<&User> for AddUserResponse {
    fn from(user: &User) -> Self {
        Self { id: user.id }
    }
}
