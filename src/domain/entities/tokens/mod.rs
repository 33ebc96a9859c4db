//! Token Entity Module

pub mod refresh_token;

pub use refresh_token::RefreshToken;
