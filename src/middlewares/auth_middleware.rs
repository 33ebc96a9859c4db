//! JWT 인증 미들웨어
//!
//! `Authorization: Bearer <token>` 헤더를 [`AccessTokenIssuer::resolve_identity`]로
//! 해석하여 [`AuthenticatedUser`]를 요청 extensions에 넣습니다.
//!
//! [`AccessTokenIssuer::resolve_identity`]: crate::services::auth::AccessTokenIssuer::resolve_identity
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 유효한 Bearer 토큰이 없는 요청을 401로 거절하는 미들웨어
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
