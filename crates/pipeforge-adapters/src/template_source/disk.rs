//! Filesystem-backed template source.
//!
//! Reads template trees from a directory laid out as:
//!
//! ```text
//! templates/
//! ├── java-spring-boot/        ← one subtree per app type
//! │   └── terraform/main.tf
//! ├── react-frontend/
//! ├── node-backend/
//! ├── common/                  ← merged into every project
//! │   └── ansible/deploy.yml
//! └── github-workflows/
//!     ├── backend-deploy.yml
//!     └── frontend-deploy.yml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use pipeforge_core::{
    application::{
        ApplicationError,
        ports::{TemplateFile, TemplateSource},
    },
    error::PipeforgeResult,
};

use super::WORKFLOWS_TREE;

/// Template source rooted at a templates directory on disk.
#[derive(Debug, Clone)]
pub struct DiskTemplateSource {
    root: PathBuf,
}

impl DiskTemplateSource {
    /// Create a source rooted at the given templates directory.
    ///
    /// The directory is not required to exist; missing subtrees surface as
    /// empty listings, matching the copy step's merge-or-skip semantics.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tree_root(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl TemplateSource for DiskTemplateSource {
    fn has_tree(&self, name: &str) -> bool {
        self.tree_root(name).is_dir()
    }

    #[instrument(skip(self))]
    fn tree_files(&self, name: &str) -> PipeforgeResult<Vec<TemplateFile>> {
        let tree_root = self.tree_root(name);
        if !tree_root.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&tree_root).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::TemplateReadError {
                path: tree_root.clone(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&tree_root)
                .map_err(|e| ApplicationError::TemplateReadError {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                })?
                .to_path_buf();
            let content =
                fs::read_to_string(entry.path()).map_err(|e| ApplicationError::TemplateReadError {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                })?;

            files.push(TemplateFile::new(relative, content));
        }

        debug!(tree = name, files = files.len(), "Template tree listed");
        Ok(files)
    }

    fn read_workflow(&self, file_name: &str) -> PipeforgeResult<String> {
        let path = self.root.join(WORKFLOWS_TREE).join(file_name);
        if !path.is_file() {
            return Err(ApplicationError::WorkflowTemplateMissing { path }.into());
        }

        fs::read_to_string(&path)
            .map_err(|e| {
                ApplicationError::TemplateReadError {
                    path,
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
