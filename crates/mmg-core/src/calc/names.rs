use crate::model::{Attribute, Parameter, Type};

/// Maps model concepts to identifiers used in generated documents.
///
/// Implementations must return names that are stable and unique within a
/// version.
pub trait NamesCalculator {
    /// Name of the schema definition generated for a type.
    fn schema_name(&self, ty: &Type) -> String;

    /// Name of the property generated for a struct attribute.
    fn attribute_property_name(&self, attribute: &Attribute) -> String;

    /// Name of the property generated for a method parameter.
    fn parameter_property_name(&self, parameter: &Parameter) -> String;
}

/// Pascal case schema names, snake case property names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNames;

impl NamesCalculator for DefaultNames {
    fn schema_name(&self, ty: &Type) -> String {
        ty.name.pascal_case()
    }

    fn attribute_property_name(&self, attribute: &Attribute) -> String {
        attribute.name.snake_case()
    }

    fn parameter_property_name(&self, parameter: &Parameter) -> String {
        parameter.name.snake_case()
    }
}
