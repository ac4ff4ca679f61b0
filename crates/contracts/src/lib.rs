//! Shared types between the dashboard frontend and its backend collaborators.
//!
//! Everything here is target-independent: it compiles for `wasm32` and is
//! tested natively.

pub mod shared;
