pub mod request;
pub mod response;

pub use request::{CreateProfileRequest, UpdateProfileRequest};
pub use response::ProfileResponse;
