pub use block::{Block, Transaction};
pub use log_entry::LogEntry;
pub use receipt::Receipt;

mod block;
mod log_entry;
mod receipt;
