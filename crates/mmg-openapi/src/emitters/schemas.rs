use mmg_core::buffer::ObjectWriter;
use mmg_core::model::{Attribute, Type, TypeKind};

use super::{Emitter, description};

/// Name of the schema shared by every error response.
pub const ERROR_SCHEMA: &str = "Error";

impl Emitter<'_> {
    /// Fill `components.schemas`: one schema per enum and struct type, in
    /// model order, followed by the `Error` schema.
    pub fn schemas(&mut self, out: &mut ObjectWriter<'_>) {
        let version = self.version;
        for (_, ty) in version.types() {
            if (ty.is_enum() || ty.is_struct()) && self.names.schema_name(ty) == ERROR_SCHEMA {
                self.reporter.error(format!(
                    "Schema name of type '{}' clashes with the built-in '{ERROR_SCHEMA}' schema, \
                     it will be ignored",
                    ty.name
                ));
                continue;
            }
            match &ty.kind {
                TypeKind::Enum { .. } => self.enum_schema(out, ty),
                TypeKind::Struct { .. } => self.struct_schema(out, ty),
                _ => {}
            }
        }
        error_schema(out);
    }

    fn enum_schema(&mut self, out: &mut ObjectWriter<'_>, ty: &Type) {
        let name = self.names.schema_name(ty);
        let binding = self.binding;
        out.object(&name, |schema| {
            description(schema, &ty.doc);
            schema.field("type", "string");
            schema.array("enum", |values| {
                for value in ty.values() {
                    values.item(binding.enum_value_name(value));
                }
            });
        });
    }

    fn struct_schema(&mut self, out: &mut ObjectWriter<'_>, ty: &Type) {
        let name = self.names.schema_name(ty);
        out.object(&name, |schema| {
            description(schema, &ty.doc);
            schema.object("properties", |properties| {
                if ty.is_class() {
                    identity_properties(properties, &name);
                }
                for attribute in ty.attributes() {
                    self.struct_property(properties, attribute);
                }
            });
        });
    }

    fn struct_property(&mut self, out: &mut ObjectWriter<'_>, attribute: &Attribute) {
        let name = self.names.attribute_property_name(attribute);
        out.object(&name, |property| {
            description(property, &attribute.doc);
            self.schema_reference(property, attribute.ty);
        });
    }
}

/// The `kind`, `id` and `href` properties that every class type carries.
fn identity_properties(out: &mut ObjectWriter<'_>, name: &str) {
    out.object("kind", |kind| {
        description(
            kind,
            &format!(
                "Indicates the type of this object. Will be '{name}' if this is a complete \
                 object or '{name}Link' if it is just a link."
            ),
        );
        kind.field("type", "string");
    });
    out.object("id", |id| {
        description(id, "Unique identifier of the object.");
        id.field("type", "string");
    });
    out.object("href", |href| {
        description(href, "Self link.");
        href.field("type", "string");
    });
}

fn error_schema(out: &mut ObjectWriter<'_>) {
    out.object(ERROR_SCHEMA, |schema| {
        schema.field("type", "object");
        schema.object("properties", |properties| {
            properties.object("kind", |kind| {
                description(kind, "Indicates the type of this object. Will always be 'Error'");
                kind.field("type", "string");
            });
            properties.object("id", |id| {
                description(id, "Numeric identifier of the error.");
                id.field("type", "integer");
                id.field("format", "int32");
            });
            properties.object("href", |href| {
                description(href, "Self link.");
                href.field("type", "string");
            });
            properties.object("code", |code| {
                description(
                    code,
                    "Globally unique code of the error, composed of the unique identifier of \
                     the API and the numeric identifier of the error. For example, for if the \
                     numeric identifier of the error is `93` and the identifier of the API is \
                     `clusters_mgmt` then the code will be `CLUSTERS-MGMT-93`.",
                );
                code.field("type", "string");
            });
            properties.object("reason", |reason| {
                description(reason, "Human readable description of the error.");
                reason.field("type", "string");
            });
            properties.object("details", |details| {
                description(details, "Extra information about the error.");
                details.field("type", "object");
                details.field("additionalProperties", true);
            });
        });
    });
}
