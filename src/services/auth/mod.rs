//! 토큰 인증 서비스 모듈
//!
//! ```text
//! TokenRefreshService ─► AccessTokenIssuer ─► TokenCodec
//!         │
//!         └─► RefreshTokenStore / UserStore
//! ```

pub mod access_token_issuer;
pub mod token_codec;
pub mod token_refresh_service;

pub use access_token_issuer::{AccessTokenIssuer, USER_ID_CLAIM, extract_bearer_token};
pub use token_codec::{Clock, FixedClock, SystemClock, TokenCodec, TokenError};
pub use token_refresh_service::TokenRefreshService;
