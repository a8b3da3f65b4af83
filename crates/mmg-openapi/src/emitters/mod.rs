pub mod document;
pub mod operations;
pub mod paths;
pub mod reference;
pub mod schemas;

use mmg_core::buffer::ObjectWriter;
use mmg_core::calc::{BindingCalculator, NamesCalculator};
use mmg_core::model::Version;
use mmg_core::reporter::Reporter;

/// Media type used for every request and response body.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// State shared by the emitters while one version is generated.
///
/// Problems that don't prevent the rest of the document from being generated
/// go to `reporter`.
pub struct Emitter<'a> {
    pub version: &'a Version,
    pub names: &'a dyn NamesCalculator,
    pub binding: &'a dyn BindingCalculator,
    pub reporter: &'a mut Reporter,
}

impl<'a> Emitter<'a> {
    pub fn new(
        version: &'a Version,
        names: &'a dyn NamesCalculator,
        binding: &'a dyn BindingCalculator,
        reporter: &'a mut Reporter,
    ) -> Self {
        Self {
            version,
            names,
            binding,
            reporter,
        }
    }
}

/// Write `description`, unless the documentation is empty.
pub fn description(out: &mut ObjectWriter<'_>, doc: &str) {
    if !doc.is_empty() {
        out.field("description", doc);
    }
}
