//! Pipeforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Pipeforge
//! DevOps pipeline scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          pipeforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (SetupService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TemplateSource, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pipeforge-adapters (Infrastructure)  │
//! │  (DiskTemplateSource, LocalFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (AppType, PipelineDefaults, RenderCtx)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pipeforge_core::{
//!     application::SetupService,
//!     domain::{AppType, SetupRequest},
//! };
//!
//! // 1. Describe the project to scaffold
//! let request = SetupRequest::new("/tmp/demo", AppType::ReactFrontend, "Demo");
//!
//! // 2. Use the application service (with injected adapters)
//! let service = SetupService::new(templates, filesystem);
//! service.setup(&request, &defaults).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SetupReport, SetupService,
        ports::{Filesystem, TemplateFile, TemplateSource},
    };
    pub use crate::domain::{AppType, PipelineDefaults, RenderContext, SetupRequest};
    pub use crate::error::{PipeforgeError, PipeforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
