use std::fmt;

use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};

/// A model identifier.
///
/// Names are kept in snake case words, so `ClusterState`, `clusterState` and
/// `cluster_state` are all the same name. Rendering into a particular casing
/// is left to the calculators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(text: &str) -> Self {
        Name(text.to_snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.0.clone()
    }

    pub fn pascal_case(&self) -> String {
        self.0.to_pascal_case()
    }

    pub fn camel_case(&self) -> String {
        self.0.to_lower_camel_case()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}
