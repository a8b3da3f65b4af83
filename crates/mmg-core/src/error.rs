use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown type '{name}' in version '{version}'")]
    UnknownType { version: String, name: String },

    #[error("unknown resource '{name}' in version '{version}'")]
    UnknownResource { version: String, name: String },

    #[error("duplicate {what} '{name}' in version '{version}'")]
    Duplicate {
        version: String,
        what: &'static str,
        name: String,
    },
}

/// Raised when a builder is missing one of its mandatory inputs.
#[derive(Debug, Error)]
#[error("{0} is mandatory")]
pub struct BuildError(pub &'static str);

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("{}", errors_message(.0))]
    Errors(usize),
}

fn errors_message(count: &usize) -> String {
    if *count == 1 {
        "there was 1 error".to_string()
    } else {
        format!("there were {count} errors")
    }
}
