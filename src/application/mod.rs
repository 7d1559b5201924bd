pub mod console;
pub mod persist;
pub mod seed;
pub mod session;

pub use console::Console;
pub use persist::persist_all;
pub use seed::{seed, Seed};
pub use session::{Session, SessionSummary};
