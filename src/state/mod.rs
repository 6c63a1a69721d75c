//! Shared client-side state.

pub mod ui;
