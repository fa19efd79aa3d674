//! Pool registry.
//!
//! [`Factory`] owns every pool and the asset → pool mapping.  It creates
//! pools but never edits their internals.

mod registry;

pub use registry::Factory;
