pub mod request;
pub mod response;

pub use request::CreateAccessTokenRequest;
pub use response::{CreateAccessTokenResponse, TokenPair};
