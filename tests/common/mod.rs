//! Integration test common infrastructure.
//!
//! Provides an in-memory store that speaks enough of the command set to
//! exercise the adapters end to end.

pub mod store;

#[allow(unused_imports)]
pub use store::MemoryStore;
