pub mod identity;

pub use identity::{ADMIN_IDENTITY_ID, Identity, Role, USER_IDENTITY_ID};
