pub mod authenticated_identity;

pub use authenticated_identity::AuthenticatedIdentity;
