pub mod catalog;
pub mod errors;
pub mod order;
pub mod ports;

pub use catalog::{Customer, Product};
pub use errors::DomainError;
pub use order::{Order, OrderLine, Sale};
pub use ports::{Entity, Persist, ProductCatalog, Store};
