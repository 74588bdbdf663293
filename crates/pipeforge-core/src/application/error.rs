//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The selected workflow template file does not exist.
    #[error("Workflow template not found: {path}")]
    WorkflowTemplateMissing { path: PathBuf },

    /// A template tree could not be read.
    #[error("Failed to read template tree at {path}: {reason}")]
    TemplateReadError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::WorkflowTemplateMissing { path } => vec![
                format!("Expected a workflow template at: {}", path.display()),
                "Ensure the templates directory contains github-workflows/".into(),
                "Both backend-deploy.yml and frontend-deploy.yml must be present".into(),
            ],
            Self::TemplateReadError { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check the templates directory layout and permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::WorkflowTemplateMissing { .. } => ErrorCategory::NotFound,
            Self::TemplateReadError { .. } => ErrorCategory::Internal,
        }
    }
}
