pub mod availability;
pub mod filter;
pub mod messaging;
pub mod watcher;
