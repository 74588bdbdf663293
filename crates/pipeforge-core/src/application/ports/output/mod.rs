//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pipeforge-adapters` crate provides implementations.

use crate::error::PipeforgeResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pipeforge_adapters::filesystem::LocalFilesystem` (production)
/// - `pipeforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PipeforgeResult<()>;

    /// Write content to a file, overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> PipeforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// A single file in a template tree: its path relative to the tree root,
/// and its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub relative_path: PathBuf,
    pub content: String,
}

impl TemplateFile {
    pub fn new(relative_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// Port for reading the static template tree.
///
/// A source is rooted at a templates directory holding one subtree per app
/// type, a shared `common` subtree, and a `github-workflows` subtree with
/// the two deploy workflow templates.
///
/// Implemented by:
/// - `pipeforge_adapters::template_source::DiskTemplateSource` (production)
/// - `pipeforge_adapters::template_source::MemoryTemplateSource` (testing)
pub trait TemplateSource: Send + Sync {
    /// Whether a template subtree with this name exists.
    fn has_tree(&self, name: &str) -> bool;

    /// All files in the named subtree, paths relative to the subtree root,
    /// in a stable order. Returns an empty list for a missing subtree.
    fn tree_files(&self, name: &str) -> PipeforgeResult<Vec<TemplateFile>>;

    /// Read a workflow template from the `github-workflows` subtree.
    ///
    /// Fails with `ApplicationError::WorkflowTemplateMissing` when the file
    /// does not exist - a missing workflow template is a hard error, unlike
    /// a missing app-type subtree.
    fn read_workflow(&self, file_name: &str) -> PipeforgeResult<String>;
}
