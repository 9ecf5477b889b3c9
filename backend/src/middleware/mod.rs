//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit outside handlers, currently
//! trace-id propagation.

pub mod trace;

pub use trace::Trace;
