//! Deterministic JSON serialization for the history and settings files.
//!
//! Files are written with 2-space indentation and a trailing newline so
//! they diff cleanly and stay readable when edited by hand.

mod json;

pub use json::*;
