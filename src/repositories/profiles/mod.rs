pub mod memory_profile_store;
pub mod mongo_profile_store;
pub mod profile_store;

pub use memory_profile_store::MemoryProfileStore;
pub use mongo_profile_store::MongoProfileStore;
pub use profile_store::ProfileStore;
