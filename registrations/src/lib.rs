mod memory_store;
mod traits;

pub use memory_store::{DEFAULT_CAPACITY, MemoryRegistrationStore};
pub use traits::RegistrationStore;
