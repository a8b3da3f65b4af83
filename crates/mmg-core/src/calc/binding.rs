use crate::model::{EnumValue, Locator, Method, MethodKind, Parameter, Version};

/// Decides how methods and their parameters are bound to HTTP.
pub trait BindingCalculator {
    /// HTTP verb of the method, upper case.
    fn method(&self, method: &Method) -> String;

    /// Parameters sent in the request body, in declaration order.
    fn request_body_parameters<'m>(
        &self,
        version: &Version,
        method: &'m Method,
    ) -> Vec<&'m Parameter>;

    /// Parameters sent in the query string, in declaration order.
    fn request_query_parameters<'m>(
        &self,
        version: &Version,
        method: &'m Method,
    ) -> Vec<&'m Parameter>;

    /// Parameters returned in the response body, in declaration order.
    fn response_parameters<'m>(&self, method: &'m Method) -> Vec<&'m Parameter>;

    /// Status code returned when the method succeeds.
    fn default_status(&self, method: &Method) -> String;

    /// URL segment used for a locator.
    fn locator_segment(&self, locator: &Locator) -> String;

    /// Name of a parameter as it appears on the wire.
    fn parameter_name(&self, parameter: &Parameter) -> String;

    /// Name of an enum value as it appears on the wire.
    fn enum_value_name(&self, value: &EnumValue) -> String;
}

/// The REST binding used by the services:
///
/// - `get`, `list` → `GET`
/// - `add`, `post` and actions → `POST`
/// - `update` → `PATCH`
/// - `delete` → `DELETE`
///
/// Methods without a body send every inbound parameter in the query string.
/// The others send inbound scalars in the query string and everything else in
/// the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBinding;

impl HttpBinding {
    fn has_body(method: &Method) -> bool {
        !matches!(
            method.kind(),
            MethodKind::Get | MethodKind::List | MethodKind::Delete
        )
    }

    fn is_scalar(version: &Version, parameter: &Parameter) -> bool {
        version
            .get_type(parameter.ty)
            .is_some_and(|ty| ty.is_scalar())
    }
}

impl BindingCalculator for HttpBinding {
    fn method(&self, method: &Method) -> String {
        match method.kind() {
            MethodKind::Get | MethodKind::List => "GET",
            MethodKind::Add | MethodKind::Post | MethodKind::Action => "POST",
            MethodKind::Update => "PATCH",
            MethodKind::Delete => "DELETE",
        }
        .to_string()
    }

    fn request_body_parameters<'m>(
        &self,
        version: &Version,
        method: &'m Method,
    ) -> Vec<&'m Parameter> {
        if !Self::has_body(method) {
            return Vec::new();
        }
        method
            .parameters
            .iter()
            .filter(|p| p.direction.is_in() && !Self::is_scalar(version, p))
            .collect()
    }

    fn request_query_parameters<'m>(
        &self,
        version: &Version,
        method: &'m Method,
    ) -> Vec<&'m Parameter> {
        let body = Self::has_body(method);
        method
            .parameters
            .iter()
            .filter(|p| p.direction.is_in() && (!body || Self::is_scalar(version, p)))
            .collect()
    }

    fn response_parameters<'m>(&self, method: &'m Method) -> Vec<&'m Parameter> {
        method
            .parameters
            .iter()
            .filter(|p| p.direction.is_out())
            .collect()
    }

    fn default_status(&self, method: &Method) -> String {
        match method.kind() {
            MethodKind::Add => "201",
            MethodKind::Delete => "204",
            _ => "200",
        }
        .to_string()
    }

    fn locator_segment(&self, locator: &Locator) -> String {
        locator.name.snake_case()
    }

    fn parameter_name(&self, parameter: &Parameter) -> String {
        parameter.name.snake_case()
    }

    fn enum_value_name(&self, value: &EnumValue) -> String {
        value.name.snake_case()
    }
}
