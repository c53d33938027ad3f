//! Per-document drawing session
//!
//! A [`state::RedactionSession`] tracks the committed shape list and the
//! in-progress shape for exactly one document page. Sessions are created
//! empty when a page becomes active and discarded on navigation or after a
//! bake; shapes never survive navigation unless baked.

pub mod state;

pub use state::*;
