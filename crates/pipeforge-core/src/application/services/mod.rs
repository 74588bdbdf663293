//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "set up a DevOps pipeline for a project".

pub mod setup_service;

pub use setup_service::{SetupReport, SetupService};
