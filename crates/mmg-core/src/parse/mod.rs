pub mod model_file;

use crate::error::ParseError;
use crate::model::Model;
use model_file::ModelFile;

/// Load a model from a YAML description.
pub fn from_yaml(input: &str) -> Result<Model, ParseError> {
    let file: ModelFile = serde_yaml_ng::from_str(input)?;
    file.into_model()
}

/// Load a model from a JSON description.
pub fn from_json(input: &str) -> Result<Model, ParseError> {
    let file: ModelFile = serde_json::from_str(input)?;
    file.into_model()
}
