//! Adapters that put a namespace between a caller and a store.
//!
//! Both adapters are [`Transport`]s themselves, so they can be layered and
//! boxed interchangeably.

mod prefix_only;
mod round_trip;
mod transport;

pub use prefix_only::PrefixOnly;
pub use round_trip::RoundTrip;
pub use transport::{Pipeline, Transport};

use kvns_core::Rewrite;

use crate::config::AdapterMode;

/// Wrap `transport` in the adapter selected by `mode`.
pub fn layer<T, R>(mode: AdapterMode, transport: T, rewriter: R) -> Box<dyn Transport>
where
    T: Transport + 'static,
    R: Rewrite + 'static,
{
    match mode {
        AdapterMode::RoundTrip => Box::new(RoundTrip::new(transport, rewriter)),
        AdapterMode::PrefixOnly => Box::new(PrefixOnly::new(transport, rewriter)),
    }
}
