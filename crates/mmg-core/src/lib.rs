pub mod buffer;
pub mod calc;
pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod reporter;

use error::GenerateError;

/// A backend that renders the model into files.
pub trait Generator {
    /// Generate every file. Non-fatal problems are accumulated and turned into
    /// an error only after all the files have been attempted.
    fn run(&mut self) -> Result<(), GenerateError>;
}
