use mmg_core::buffer::ObjectWriter;
use mmg_core::model::{Primitive, TypeId, TypeKind};

use super::Emitter;

/// Prefix of references to the schemas generated in `components.schemas`.
pub const SCHEMAS_REF_PREFIX: &str = "#/components/schemas/";

impl Emitter<'_> {
    /// Describe a value of type `id` in the schema currently open in `out`:
    /// inline for scalars, lists and maps, by reference for enums and structs.
    ///
    /// Types without a JSON representation are reported and leave the schema
    /// untouched.
    pub fn schema_reference(&mut self, out: &mut ObjectWriter<'_>, id: TypeId) {
        let version = self.version;
        let Some(ty) = version.get_type(id) else {
            self.reporter.error(format!(
                "Don't know how to generate schema reference for type with index {}",
                id.index()
            ));
            return;
        };
        match &ty.kind {
            TypeKind::Primitive(primitive) => primitive_schema(out, *primitive),
            TypeKind::Enum { .. } | TypeKind::Struct { .. } => {
                let name = self.names.schema_name(ty);
                out.field("$ref", format!("{SCHEMAS_REF_PREFIX}{name}"));
            }
            TypeKind::List(element) => {
                out.field("type", "array");
                out.object("items", |items| self.schema_reference(items, *element));
            }
            TypeKind::Map(element) => {
                out.field("type", "object");
                out.object("additionalProperties", |values| {
                    self.schema_reference(values, *element)
                });
            }
            TypeKind::Interface => {
                self.reporter.error(format!(
                    "Don't know how to generate schema reference for type '{}'",
                    ty.name
                ));
            }
        }
    }
}

fn primitive_schema(out: &mut ObjectWriter<'_>, primitive: Primitive) {
    let (kind, format) = match primitive {
        Primitive::Boolean => ("boolean", None),
        Primitive::Integer => ("integer", Some("int32")),
        Primitive::Long => ("integer", Some("int64")),
        Primitive::Float => ("number", Some("float")),
        Primitive::String => ("string", None),
        Primitive::Date => ("string", Some("date-time")),
    };
    out.field("type", kind);
    if let Some(format) = format {
        out.field("format", format);
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use mmg_core::buffer::Node;
    use mmg_core::calc::{DefaultNames, HttpBinding};
    use mmg_core::model::{Type, Version};
    use mmg_core::reporter::Reporter;

    use super::*;

    fn resolve(version: &Version, id: TypeId, reporter: &mut Reporter) -> Node {
        let mut fields = IndexMap::new();
        let mut emitter = Emitter::new(version, &DefaultNames, &HttpBinding, reporter);
        emitter.schema_reference(&mut ObjectWriter::new(&mut fields), id);
        Node::Object(fields)
    }

    #[test]
    fn test_primitives() {
        let version = Version::new("clusters_mgmt", "v1");
        let mut reporter = Reporter::new();
        let cases = [
            (version.boolean(), serde_json::json!({"type": "boolean"})),
            (
                version.integer(),
                serde_json::json!({"type": "integer", "format": "int32"}),
            ),
            (
                version.long(),
                serde_json::json!({"type": "integer", "format": "int64"}),
            ),
            (
                version.float(),
                serde_json::json!({"type": "number", "format": "float"}),
            ),
            (version.string(), serde_json::json!({"type": "string"})),
            (
                version.date(),
                serde_json::json!({"type": "string", "format": "date-time"}),
            ),
        ];
        for (id, expected) in cases {
            let node = resolve(&version, id, &mut reporter);
            assert_eq!(serde_json::to_value(&node).unwrap(), expected);
        }
        assert_eq!(reporter.errors(), 0);
    }

    #[test]
    fn test_named_types_are_referenced() {
        let mut version = Version::new("clusters_mgmt", "v1");
        let state = version.add_type(Type::new(
            "cluster_state",
            TypeKind::Enum { values: Vec::new() },
        ));
        let cluster = version.add_type(Type::new(
            "cluster",
            TypeKind::Struct {
                attributes: Vec::new(),
                class: true,
            },
        ));
        let mut reporter = Reporter::new();
        let node = resolve(&version, state, &mut reporter);
        assert_eq!(
            node.pointer(&["$ref"]).and_then(Node::as_str),
            Some("#/components/schemas/ClusterState")
        );
        let node = resolve(&version, cluster, &mut reporter);
        assert_eq!(
            node.pointer(&["$ref"]).and_then(Node::as_str),
            Some("#/components/schemas/Cluster")
        );
    }

    #[test]
    fn test_nested_lists_and_maps() {
        let mut version = Version::new("clusters_mgmt", "v1");
        let string = version.string();
        let strings = version.list_of(string);
        let matrix = version.list_of(strings);
        let index = version.map_of(matrix);
        let mut reporter = Reporter::new();

        let node = resolve(&version, matrix, &mut reporter);
        insta::assert_json_snapshot!(node, @r#"
        {
          "type": "array",
          "items": {
            "type": "array",
            "items": {
              "type": "string"
            }
          }
        }
        "#);

        let node = resolve(&version, index, &mut reporter);
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            serde_json::json!({
                "type": "object",
                "additionalProperties": {
                    "type": "array",
                    "items": {"type": "array", "items": {"type": "string"}}
                }
            })
        );
        assert_eq!(reporter.errors(), 0);
    }

    #[test]
    fn test_interface_is_reported() {
        let mut version = Version::new("clusters_mgmt", "v1");
        let interface = version.interface();
        let anything = version.map_of(interface);
        let mut reporter = Reporter::new();

        let node = resolve(&version, interface, &mut reporter);
        assert!(node.as_object().unwrap().is_empty());
        assert_eq!(reporter.errors(), 1);
        assert_eq!(
            reporter.messages()[0],
            "Don't know how to generate schema reference for type 'interface'"
        );

        // The enclosing map is still described, only the element slot stays empty.
        let node = resolve(&version, anything, &mut reporter);
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            serde_json::json!({"type": "object", "additionalProperties": {}})
        );
        assert_eq!(reporter.errors(), 2);
    }

    #[test]
    fn test_dangling_type_is_reported() {
        let version = Version::new("clusters_mgmt", "v1");
        let mut other = Version::new("clusters_mgmt", "v2");
        let string = other.string();
        let foreign = other.list_of(string);
        let mut reporter = Reporter::new();
        let node = resolve(&version, foreign, &mut reporter);
        assert!(node.as_object().unwrap().is_empty());
        assert_eq!(reporter.errors(), 1);
    }
}
