//! Suggestion types shared by providers, the executor and the encoder
//!
//! A suggestion is one candidate completion plus the metadata the client
//! needs to render it.

mod types;

pub use types::*;
