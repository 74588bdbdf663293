//! Core domain layer for Pipeforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod app_type;
pub mod defaults;
pub mod error;
pub mod render;
pub mod request;

// Re-exports for convenience
pub use app_type::AppType;
pub use defaults::PipelineDefaults;
pub use error::{DomainError, ErrorCategory};
pub use render::RenderContext;
pub use request::SetupRequest;
