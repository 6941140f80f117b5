//! The save-string codec: grammar validation, encoding and decoding.
//!
//! `decode(encode(save))` reproduces the same blocks in the same order,
//! with the same kinds, states, positions and properties, and the same
//! wiring; every string `encode` produces is accepted by the grammar.

mod decode;
mod encode;
pub mod grammar;

pub use decode::decode;
pub use encode::encode;
