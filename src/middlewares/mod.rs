//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 토큰이 없거나 유효하지 않으면 `{"error": ...}` 형식의 401 응답
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .service(
//!         web::resource("/api/refresh-token")
//!             .wrap(AuthMiddleware::required())
//!             .route(web::delete().to(delete_refresh_token)),
//!     )
//! ```
//!
//! 미들웨어는 `web::Data<AppState>`에 등록된 발급자로 토큰을 해석하므로
//! 앱 데이터 등록이 먼저 되어 있어야 합니다.

mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
