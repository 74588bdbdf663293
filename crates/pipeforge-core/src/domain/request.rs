//! The setup request - what to scaffold and where.

use std::path::{Path, PathBuf};

use crate::domain::AppType;

/// A single pipeline-setup invocation.
///
/// The project name and path are used purely for string interpolation and
/// directory targeting; no legality or collision checks are performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupRequest {
    project_path: PathBuf,
    app_type: AppType,
    project_name: String,
}

impl SetupRequest {
    pub fn new(
        project_path: impl Into<PathBuf>,
        app_type: AppType,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            project_path: project_path.into(),
            app_type,
            project_name: project_name.into(),
        }
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn app_type(&self) -> AppType {
        self.app_type
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The merge target for copied templates and generated config files.
    pub fn devops_dir(&self) -> PathBuf {
        self.project_path.join("devops")
    }

    /// Where the rendered CI workflow is written.
    pub fn workflow_path(&self) -> PathBuf {
        self.project_path.join(".github").join("workflows").join("deploy.yml")
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devops_dir_is_under_project_path() {
        let req = SetupRequest::new("/tmp/demo", AppType::ReactFrontend, "Demo");
        assert_eq!(req.devops_dir(), PathBuf::from("/tmp/demo/devops"));
    }

    #[test]
    fn workflow_path_is_fixed_relative_location() {
        let req = SetupRequest::new("/tmp/demo", AppType::NodeBackend, "Demo");
        assert_eq!(
            req.workflow_path(),
            PathBuf::from("/tmp/demo/.github/workflows/deploy.yml")
        );
    }
}
