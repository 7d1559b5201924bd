pub mod memory;
pub mod models;
pub mod store;

pub use memory::InMemoryStore;
pub use store::DieselStore;
