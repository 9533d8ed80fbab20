//! Command handlers.

pub mod create;
