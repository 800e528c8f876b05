//! Adapters - concrete implementations of the crate's ports

pub mod in_memory_store;
pub mod msgpack_store;

pub use in_memory_store::InMemoryStore;
pub use msgpack_store::MsgPackStore;
