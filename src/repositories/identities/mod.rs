pub mod identity_store;
pub mod memory_identity_store;
pub mod mongo_identity_store;

pub use identity_store::IdentityStore;
pub use memory_identity_store::MemoryIdentityStore;
pub use mongo_identity_store::MongoIdentityStore;
