pub mod names;
pub mod resources;
pub mod types;
pub mod version;

pub use names::Name;
pub use resources::{Direction, Locator, Method, MethodKind, Parameter, Path, Resource, ResourceId};
pub use types::{Attribute, EnumValue, Primitive, Type, TypeId, TypeKind};
pub use version::Version;

/// A service and its versions.
#[derive(Debug, Clone)]
pub struct Service {
    pub name: Name,
    pub doc: String,
    pub versions: Vec<Version>,
}

impl Service {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            versions: Vec::new(),
        }
    }

    /// Create a new, empty version owned by this service.
    pub fn add_version(&mut self, name: impl Into<Name>) -> &mut Version {
        let version = Version::new(self.name.clone(), name);
        self.versions.push(version);
        let last = self.versions.len() - 1;
        &mut self.versions[last]
    }
}

/// The complete API model consumed by the generators.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub services: Vec<Service>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }

    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.services.iter().flat_map(|s| s.versions.iter())
    }
}
