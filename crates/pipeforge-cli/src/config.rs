//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup from the YAML pipeline
//! configuration file and passed down by value.  The CLI layer owns config
//! loading; the core crate only ever sees the parsed `PipelineDefaults`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use pipeforge_core::domain::PipelineDefaults;

/// Default configuration file, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pipeline-config.yml";

/// Application configuration, deserialized from `pipeline-config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Infrastructure defaults interpolated into generated files.
    pub defaults: PipelineDefaults,
    /// Template settings; optional in the file.
    #[serde(default)]
    pub templates: TemplateSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Root of the template tree.
    #[serde(default = "default_templates_root")]
    pub root: PathBuf,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            root: default_templates_root(),
        }
    }
}

fn default_templates_root() -> PathBuf {
    PathBuf::from("templates")
}

impl AppConfig {
    /// Load configuration from the given file, or from
    /// [`DEFAULT_CONFIG_FILE`] when none was passed via `--config`.
    ///
    /// A missing or malformed file is an error; there is no built-in
    /// fallback configuration.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Malformed configuration file: {}", path.display()))?;
        Ok(config)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const SAMPLE: &str = "\
defaults:
  aws_region: us-east-1
  instance_type: t3.micro
  min_instances: 1
  max_instances: 3
  enable_database: false
  database_type: none
  database_instance_class: none
";

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_defaults_section() {
        let (_dir, path) = write_config(SAMPLE);
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.defaults.aws_region, "us-east-1");
        assert_eq!(config.defaults.max_instances, 3);
    }

    #[test]
    fn templates_root_defaults_when_section_absent() {
        let (_dir, path) = write_config(SAMPLE);
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.templates.root, PathBuf::from("templates"));
    }

    #[test]
    fn templates_root_is_configurable() {
        let yaml = format!("{SAMPLE}templates:\n  root: infra/templates\n");
        let (_dir, path) = write_config(&yaml);
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.templates.root, PathBuf::from("infra/templates"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load(Some(&PathBuf::from("/definitely/not/here.yml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let (_dir, path) = write_config("defaults: [not, a, mapping]\n");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Malformed configuration file"));
    }

    #[test]
    fn incomplete_defaults_is_an_error() {
        let (_dir, path) = write_config("defaults:\n  aws_region: us-east-1\n");
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
