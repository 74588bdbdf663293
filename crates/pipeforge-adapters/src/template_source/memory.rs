//! In-memory template source for testing.

use std::collections::HashMap;
use std::path::PathBuf;

use pipeforge_core::{
    application::{
        ApplicationError,
        ports::{TemplateFile, TemplateSource},
    },
    error::PipeforgeResult,
};

use super::WORKFLOWS_TREE;

/// In-memory template source for testing.
///
/// Built up with [`with_file`](Self::with_file) and
/// [`with_workflow`](Self::with_workflow).
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateSource {
    trees: HashMap<String, Vec<TemplateFile>>,
    workflows: HashMap<String, String>,
}

impl MemoryTemplateSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to a named template tree.
    pub fn with_file(
        mut self,
        tree: impl Into<String>,
        relative_path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        self.trees
            .entry(tree.into())
            .or_default()
            .push(TemplateFile::new(relative_path, content));
        self
    }

    /// Add a workflow template.
    pub fn with_workflow(mut self, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        self.workflows.insert(file_name.into(), content.into());
        self
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn has_tree(&self, name: &str) -> bool {
        self.trees.contains_key(name)
    }

    fn tree_files(&self, name: &str) -> PipeforgeResult<Vec<TemplateFile>> {
        let mut files = self.trees.get(name).cloned().unwrap_or_default();
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn read_workflow(&self, file_name: &str) -> PipeforgeResult<String> {
        self.workflows.get(file_name).cloned().ok_or_else(|| {
            ApplicationError::WorkflowTemplateMissing {
                path: PathBuf::from(WORKFLOWS_TREE).join(file_name),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_files_are_sorted() {
        let source = MemoryTemplateSource::new()
            .with_file("common", "b.txt", "b")
            .with_file("common", "a.txt", "a");

        let files = source.tree_files("common").unwrap();
        assert_eq!(files[0].relative_path, PathBuf::from("a.txt"));
        assert_eq!(files[1].relative_path, PathBuf::from("b.txt"));
    }

    #[test]
    fn unknown_tree_is_absent_but_listable() {
        let source = MemoryTemplateSource::new();
        assert!(!source.has_tree("java-spring-boot"));
        assert!(source.tree_files("java-spring-boot").unwrap().is_empty());
    }

    #[test]
    fn missing_workflow_errors() {
        let source = MemoryTemplateSource::new();
        assert!(source.read_workflow("frontend-deploy.yml").is_err());
    }
}
