pub mod request;
pub mod response;

pub use request::{CreateIdentityRequest, LoginRequest, UpdateIdentityRequest};
pub use response::IdentityResponse;
