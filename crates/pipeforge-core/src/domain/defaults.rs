//! Pipeline defaults loaded from the YAML configuration file.

use serde::{Deserialize, Serialize};

/// Infrastructure defaults interpolated into the generated Terraform
/// variables file.
///
/// Deserialized from the `defaults` section of `pipeline-config.yml` by the
/// CLI layer. Every field is required; a config file missing one fails at
/// deserialization time with a field-level error instead of a mid-run
/// lookup failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefaults {
    pub aws_region: String,
    pub instance_type: String,
    pub min_instances: u32,
    pub max_instances: u32,
    pub enable_database: bool,
    pub database_type: String,
    pub database_instance_class: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────
