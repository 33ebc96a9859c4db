//! 인증된 사용자 정보 (Principal)
//!
//! 인증 미들웨어가 `Authorization: Bearer` 토큰을 해석하여 요청 extensions에
//! 넣어두는 값입니다. 핸들러는 [`FromRequest`] 구현을 통해 직접 파라미터로 받습니다.
//!
//! ```rust,ignore
//! async fn me(user: AuthenticatedUser) -> impl Responder {
//!     HttpResponse::Ok().json(json!({ "username": user.username }))
//! }
//! ```

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::errors::AppError;

/// 요청을 보낸 인증 주체
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    /// 토큰의 subject (이메일)
    pub username: String,
    /// 부여된 권한 목록 (기본 `ROLE_USER`)
    pub authorities: Vec<String>,
    /// 인증에 사용된 액세스 토큰 원문
    #[serde(skip_serializing)]
    pub credential: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::Unauthenticated(
                "Authentication required".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn principal() -> AuthenticatedUser {
        AuthenticatedUser {
            username: "user@example.com".to_string(),
            authorities: vec!["ROLE_USER".to_string()],
            credential: "token".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(principal());

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user, principal());
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = AuthenticatedUser::extract(&req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), 401);
    }

    #[test]
    fn test_credential_is_not_serialized() {
        let value = serde_json::to_value(principal()).unwrap();

        assert!(value.get("credential").is_none());
        assert_eq!(value["username"], "user@example.com");
    }
}
