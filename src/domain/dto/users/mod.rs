pub mod request;
pub mod response;

pub use request::{AddUserRequest, LoginRequest};
pub use response::{AddUserResponse, MeResponse};
