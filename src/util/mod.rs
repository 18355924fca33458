//! Browser-boundary helpers.
//!
//! Everything here touches `web-sys` and is gated behind the `csr`
//! feature with no-op fallbacks, keeping the state machines in
//! `crate::state` testable off-wasm.

pub mod reveal;
pub mod scroll;
pub mod theme_dom;
