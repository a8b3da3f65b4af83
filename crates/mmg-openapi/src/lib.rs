//! OpenAPI 3.0 backend: renders every version of a model into an `openapi`
//! document.

pub mod emitters;
pub mod generator;

pub use generator::{OpenApiGenerator, OpenApiGeneratorBuilder};
