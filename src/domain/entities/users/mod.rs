//! Users Entity Module

pub mod user;

pub use user::{ROLE_USER, User};
