//! Application type - the key that selects templates and workflows.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// The kind of application a pipeline is scaffolded for.
///
/// Each variant maps to a template subdirectory (its string form) and one of
/// the two CI workflow templates. Unrecognized strings are rejected with an
/// explicit error rather than silently producing empty output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppType {
    JavaSpringBoot,
    ReactFrontend,
    NodeBackend,
}

/// Workflow template file used for backend app types.
pub const BACKEND_WORKFLOW: &str = "backend-deploy.yml";
/// Workflow template file used for frontend app types.
pub const FRONTEND_WORKFLOW: &str = "frontend-deploy.yml";

impl AppType {
    /// All recognized app types, in display order.
    pub const ALL: [AppType; 3] = [
        AppType::JavaSpringBoot,
        AppType::ReactFrontend,
        AppType::NodeBackend,
    ];

    /// The canonical string form, also the template subdirectory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaSpringBoot => "java-spring-boot",
            Self::ReactFrontend => "react-frontend",
            Self::NodeBackend => "node-backend",
        }
    }

    /// Name of the template subdirectory under the templates root.
    pub fn template_dir(&self) -> &'static str {
        self.as_str()
    }

    /// Whether this app type deploys through the backend workflow.
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::JavaSpringBoot | Self::NodeBackend)
    }

    /// File name of the CI workflow template for this app type.
    pub fn workflow_template(&self) -> &'static str {
        if self.is_backend() {
            BACKEND_WORKFLOW
        } else {
            FRONTEND_WORKFLOW
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::UnknownAppType { value: s.into() })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
