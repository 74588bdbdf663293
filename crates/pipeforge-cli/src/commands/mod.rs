//! Command handlers.
//!
//! Pipeforge has a single use case, so there is exactly one handler.

pub mod setup;
