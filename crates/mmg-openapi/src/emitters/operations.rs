use mmg_core::buffer::{ArrayWriter, ObjectWriter};
use mmg_core::model::{Locator, Method, Parameter, Path};

use super::schemas::ERROR_SCHEMA;
use super::reference::SCHEMAS_REF_PREFIX;
use super::{Emitter, JSON_MEDIA_TYPE, description};

impl Emitter<'_> {
    /// Write the operation of `method` reached through `path`, keyed by the
    /// lower case HTTP verb.
    pub fn operation(&mut self, out: &mut ObjectWriter<'_>, path: &Path, method: &Method) {
        let verb = self.binding.method(method).to_lowercase();
        out.object(&verb, |operation| {
            description(operation, &method.doc);
            self.parameters(operation, path, method);
            let version = self.version;
            let body = self.binding.request_body_parameters(version, method);
            if let Some(parameter) = body.first() {
                if body.len() > 1 {
                    log::debug!(
                        "method '{}' has {} body parameters, only '{}' is used",
                        method.name,
                        body.len(),
                        parameter.name
                    );
                }
                self.request_body(operation, parameter);
            }
            self.responses(operation, method);
        });
    }

    fn parameters(&mut self, out: &mut ObjectWriter<'_>, path: &Path, method: &Method) {
        let version = self.version;
        let binding = self.binding;
        let query = binding.request_query_parameters(version, method);
        out.array("parameters", |items| {
            for locator in path.locators.iter().filter(|l| l.variable) {
                self.path_parameter(items, locator);
            }
            for parameter in query {
                self.query_parameter(items, parameter);
            }
        });
    }

    fn path_parameter(&mut self, out: &mut ArrayWriter<'_>, locator: &Locator) {
        let name = format!("{}_id", self.binding.locator_segment(locator));
        out.object(|parameter| {
            parameter.field("name", name);
            parameter.field("in", "path");
            parameter.object("schema", |schema| schema.field("type", "string"));
        });
    }

    fn query_parameter(&mut self, out: &mut ArrayWriter<'_>, parameter: &Parameter) {
        let name = self.binding.parameter_name(parameter);
        out.object(|item| {
            item.field("name", name);
            description(item, &parameter.doc);
            item.field("in", "query");
            item.object("schema", |schema| self.schema_reference(schema, parameter.ty));
        });
    }

    fn request_body(&mut self, out: &mut ObjectWriter<'_>, parameter: &Parameter) {
        out.object("requestBody", |body| {
            json_content(body, |schema| self.schema_reference(schema, parameter.ty));
        });
    }

    fn responses(&mut self, out: &mut ObjectWriter<'_>, method: &Method) {
        let status = self.binding.default_status(method);
        let parameters = self.binding.response_parameters(method);
        out.object("responses", |responses| {
            responses.object(&status, |success| {
                description(success, "Success.");
                match parameters.as_slice() {
                    [] => {}
                    [single] => {
                        json_content(success, |schema| self.schema_reference(schema, single.ty));
                    }
                    many => json_content(success, |schema| {
                        schema.field("type", "object");
                        schema.object("properties", |properties| {
                            for parameter in many {
                                self.response_property(properties, parameter);
                            }
                        });
                    }),
                }
            });
            responses.object("default", |error| {
                description(error, "Error.");
                json_content(error, |schema| {
                    schema.field("$ref", format!("{SCHEMAS_REF_PREFIX}{ERROR_SCHEMA}"));
                });
            });
        });
    }

    fn response_property(&mut self, out: &mut ObjectWriter<'_>, parameter: &Parameter) {
        let name = self.names.parameter_property_name(parameter);
        out.object(&name, |property| {
            description(property, &parameter.doc);
            self.schema_reference(property, parameter.ty);
        });
    }
}

/// Write `content.application/json.schema`, filled by `schema`.
fn json_content(out: &mut ObjectWriter<'_>, schema: impl FnOnce(&mut ObjectWriter<'_>)) {
    out.object("content", |content| {
        content.object(JSON_MEDIA_TYPE, |media| media.object("schema", schema));
    });
}
