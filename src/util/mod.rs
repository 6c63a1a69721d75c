//! Browser bindings for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue from the controller so the state
//! machine stays testable without a browser. Both are hydrate-only.

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod local_storage;
