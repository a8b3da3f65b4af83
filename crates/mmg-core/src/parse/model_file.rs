//! Serialized form of a model description.
//!
//! ```yaml
//! services:
//!   - name: clusters_mgmt
//!     versions:
//!       - name: v1
//!         types:
//!           - name: ClusterState
//!             kind: enum
//!             values: [pending, ready]
//!           - name: Cluster
//!             kind: class
//!             attributes:
//!               - { name: state, type: ClusterState }
//!               - { name: labels, type: "map[string]String" }
//!         resources:
//!           - name: root
//!             locators:
//!               - { name: clusters, target: clusters }
//! ```
//!
//! Type references are built-in scalar names, declared type names, `[]T` for
//! lists and `map[string]T` for maps. The resource named `root` is the root
//! of the version.

use serde::Deserialize;

use crate::error::ParseError;
use crate::model::{
    Attribute, Direction, EnumValue, Locator, Method, Model, Name, Parameter, Resource, Service,
    Type, TypeId, TypeKind, Version,
};

const ROOT_RESOURCE: &str = "root";
const LIST_PREFIX: &str = "[]";
const MAP_PREFIX: &str = "map[string]";

#[derive(Debug, Clone, Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub services: Vec<ServiceDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDef {
    pub name: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub versions: Vec<VersionDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionDef {
    pub name: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub resources: Vec<ResourceDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDefKind {
    Enum,
    Struct,
    Class,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub kind: TypeDefKind,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub values: Vec<ValueDef>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
}

/// An enum value, either a bare name or a name with documentation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueDef {
    Name(String),
    Documented {
        name: String,
        #[serde(default)]
        doc: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: String,
    #[serde(default)]
    pub doc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDef {
    pub name: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    #[serde(default)]
    pub locators: Vec<LocatorDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodDef {
    pub name: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionDef {
    #[default]
    In,
    Out,
    #[serde(alias = "in_out")]
    Inout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: String,
    #[serde(default)]
    pub direction: DirectionDef,
    #[serde(default)]
    pub doc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocatorDef {
    pub name: String,
    pub target: String,
    #[serde(default)]
    pub variable: bool,
    #[serde(default)]
    pub doc: String,
}

impl From<DirectionDef> for Direction {
    fn from(value: DirectionDef) -> Self {
        match value {
            DirectionDef::In => Direction::In,
            DirectionDef::Out => Direction::Out,
            DirectionDef::Inout => Direction::InOut,
        }
    }
}

impl ModelFile {
    /// Resolve every reference in the description and build the model.
    pub fn into_model(self) -> Result<Model, ParseError> {
        let mut model = Model::new();
        for service_def in self.services {
            let mut service = Service::new(service_def.name.as_str());
            service.doc = service_def.doc;
            for version_def in service_def.versions {
                let version = service.add_version(version_def.name.as_str());
                version.doc = version_def.doc.clone();
                load_version(version, version_def)?;
            }
            model.add_service(service);
        }
        Ok(model)
    }
}

fn load_version(version: &mut Version, def: VersionDef) -> Result<(), ParseError> {
    // Declare every type first so attributes can refer to types declared later.
    let mut declared = Vec::with_capacity(def.types.len());
    for type_def in &def.types {
        let name = Name::new(&type_def.name);
        if version.find_type(&name).is_some() {
            return Err(duplicate(version, "type", &type_def.name));
        }
        let placeholder = TypeKind::Enum { values: Vec::new() };
        declared.push(version.add_type(Type::new(name, placeholder)));
    }
    for (id, type_def) in declared.into_iter().zip(def.types) {
        let ty = load_type(version, type_def)?;
        version.set_type(id, ty);
    }

    let mut resources = Vec::with_capacity(def.resources.len());
    for resource_def in &def.resources {
        let name = Name::new(&resource_def.name);
        if version.find_resource(&name).is_some() {
            return Err(duplicate(version, "resource", &resource_def.name));
        }
        let mut resource = Resource::new(name);
        resource.doc = resource_def.doc.clone();
        resources.push(version.add_resource(resource));
    }
    for (id, resource_def) in resources.into_iter().zip(def.resources) {
        for method_def in resource_def.methods {
            let method = load_method(version, method_def)?;
            if let Some(resource) = version.get_resource_mut(id) {
                resource.methods.push(method);
            }
        }
        for locator_def in resource_def.locators {
            let target = version
                .find_resource(&Name::new(&locator_def.target))
                .ok_or_else(|| ParseError::UnknownResource {
                    version: version.name.to_string(),
                    name: locator_def.target.clone(),
                })?;
            let mut locator = if locator_def.variable {
                Locator::variable(locator_def.name.as_str(), target)
            } else {
                Locator::segment(locator_def.name.as_str(), target)
            };
            locator.doc = locator_def.doc;
            version.add_locator(id, locator);
        }
    }
    if let Some(root) = version.find_resource(&Name::new(ROOT_RESOURCE)) {
        version.set_root(root);
    }
    Ok(())
}

fn load_type(version: &mut Version, def: TypeDef) -> Result<Type, ParseError> {
    let kind = match def.kind {
        TypeDefKind::Enum => TypeKind::Enum {
            values: def
                .values
                .into_iter()
                .map(|value| match value {
                    ValueDef::Name(name) => EnumValue {
                        name: Name::new(&name),
                        doc: String::new(),
                    },
                    ValueDef::Documented { name, doc } => EnumValue {
                        name: Name::new(&name),
                        doc,
                    },
                })
                .collect(),
        },
        TypeDefKind::Struct | TypeDefKind::Class => {
            let mut attributes = Vec::with_capacity(def.attributes.len());
            for attribute in def.attributes {
                attributes.push(Attribute {
                    name: Name::new(&attribute.name),
                    doc: attribute.doc,
                    ty: resolve_type(version, &attribute.type_ref)?,
                });
            }
            TypeKind::Struct {
                attributes,
                class: def.kind == TypeDefKind::Class,
            }
        }
    };
    Ok(Type::new(def.name.as_str(), kind).with_doc(def.doc))
}

fn load_method(version: &mut Version, def: MethodDef) -> Result<Method, ParseError> {
    let mut method = Method::new(def.name.as_str()).with_doc(def.doc);
    for parameter in def.parameters {
        let ty = resolve_type(version, &parameter.type_ref)?;
        method.parameters.push(
            Parameter::new(parameter.name.as_str(), parameter.direction.into(), ty)
                .with_doc(parameter.doc),
        );
    }
    Ok(method)
}

/// Resolve a type reference, creating list and map types as needed.
fn resolve_type(version: &mut Version, text: &str) -> Result<TypeId, ParseError> {
    let text = text.trim();
    if let Some(element) = text.strip_prefix(LIST_PREFIX) {
        let element = resolve_type(version, element)?;
        return Ok(version.list_of(element));
    }
    if let Some(element) = text.strip_prefix(MAP_PREFIX) {
        let element = resolve_type(version, element)?;
        return Ok(version.map_of(element));
    }
    version
        .find_type(&Name::new(text))
        .ok_or_else(|| ParseError::UnknownType {
            version: version.name.to_string(),
            name: text.to_string(),
        })
}

fn duplicate(version: &Version, what: &'static str, name: &str) -> ParseError {
    ParseError::Duplicate {
        version: version.name.to_string(),
        what,
        name: name.to_string(),
    }
}
