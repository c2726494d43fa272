pub use event_signature::{EventSignature, MINT, POOL_CREATED, SWAP, TRANSFER};
pub use pool_created_event::PoolCreatedEvent;
pub use swap_event::SwapEvent;
pub use topic::{address_from_topic, topic_address};
pub use transfer_event::TransferEvent;

mod event_signature;
mod pool_created_event;
mod swap_event;
mod topic;
mod transfer_event;
