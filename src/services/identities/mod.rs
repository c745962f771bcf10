pub mod identity_service;

pub use identity_service::IdentityService;
