#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

//! A Motus/Wordle engine: scoring, immutable game states, a render model for
//! hosts, and a registry of live games keyed by host handles.

pub mod errors;
pub use errors::Error;

pub mod framework;

pub mod games;
pub use games::wordle;
