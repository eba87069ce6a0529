//! Listener and connection dispatch.

pub mod listener;
