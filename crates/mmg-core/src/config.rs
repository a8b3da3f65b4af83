use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.mmg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MmgConfig {
    /// Model description to load.
    pub model: String,
    /// Directory where the generated documents are written.
    pub output: String,
    pub format: OutputFormat,
}

impl Default for MmgConfig {
    fn default() -> Self {
        Self {
            model: "model.yaml".to_string(),
            output: "output".to_string(),
            format: OutputFormat::Json,
        }
    }
}

/// Serialization used for generated documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".mmg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<MmgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: MmgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# mmg configuration
model: model.yaml     # model description (YAML or JSON)
output: output        # documents land in <output>/<package>/openapi.<format>
format: json          # json | yaml
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MmgConfig::default();
        assert_eq!(config.model, "model.yaml");
        assert_eq!(config.output, "output");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
model: api/model.yaml
output: generated
format: yaml
"#;
        let config: MmgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.model, "api/model.yaml");
        assert_eq!(config.output, "generated");
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.format.extension(), "yaml");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: MmgConfig = serde_yaml_ng::from_str("output: out\n").unwrap();
        assert_eq!(config.output, "out");
        assert_eq!(config.model, "model.yaml");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_default_content_parses() {
        let config: MmgConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.model, "model.yaml");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(loaded.is_none());
    }
}
