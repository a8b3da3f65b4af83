use super::names::Name;
use super::resources::{Locator, Path, Resource, ResourceId};
use super::types::{Primitive, Type, TypeId, TypeKind};

/// One version of a service: its types and the resource tree served under it.
///
/// Types and resources are stored in arenas owned by the version and are
/// referenced by [`TypeId`] and [`ResourceId`]. The built-in scalars are
/// registered first, in [`Primitive::ALL`] order followed by `Interface`.
#[derive(Debug, Clone)]
pub struct Version {
    pub name: Name,
    pub doc: String,
    service: Name,
    types: Vec<Type>,
    resources: Vec<Resource>,
    root: Option<ResourceId>,
}

const INTERFACE: usize = Primitive::ALL.len();

impl Version {
    pub fn new(service: impl Into<Name>, name: impl Into<Name>) -> Self {
        let mut types: Vec<Type> = Primitive::ALL
            .iter()
            .map(|p| Type::new(p.as_str(), TypeKind::Primitive(*p)))
            .collect();
        types.push(Type::new("Interface", TypeKind::Interface));
        Self {
            name: name.into(),
            doc: String::new(),
            service: service.into(),
            types,
            resources: Vec::new(),
            root: None,
        }
    }

    /// Name of the service that owns this version.
    pub fn service(&self) -> &Name {
        &self.service
    }

    pub fn boolean(&self) -> TypeId {
        self.primitive(Primitive::Boolean)
    }

    pub fn integer(&self) -> TypeId {
        self.primitive(Primitive::Integer)
    }

    pub fn long(&self) -> TypeId {
        self.primitive(Primitive::Long)
    }

    pub fn float(&self) -> TypeId {
        self.primitive(Primitive::Float)
    }

    pub fn string(&self) -> TypeId {
        self.primitive(Primitive::String)
    }

    pub fn date(&self) -> TypeId {
        self.primitive(Primitive::Date)
    }

    pub fn interface(&self) -> TypeId {
        TypeId(INTERFACE)
    }

    pub fn primitive(&self, primitive: Primitive) -> TypeId {
        let index = Primitive::ALL
            .iter()
            .position(|p| *p == primitive)
            .unwrap_or(INTERFACE);
        TypeId(index)
    }

    pub fn add_type(&mut self, ty: Type) -> TypeId {
        self.types.push(ty);
        TypeId(self.types.len() - 1)
    }

    /// Replace the type stored under `id`. Used to fill in forward-declared types.
    pub fn set_type(&mut self, id: TypeId, ty: Type) {
        if let Some(slot) = self.types.get_mut(id.0) {
            *slot = ty;
        }
    }

    /// The list type with the given element, created on first use.
    pub fn list_of(&mut self, element: TypeId) -> TypeId {
        self.intern(element, TypeKind::List(element), "list")
    }

    /// The string-keyed map type with the given element, created on first use.
    pub fn map_of(&mut self, element: TypeId) -> TypeId {
        self.intern(element, TypeKind::Map(element), "map")
    }

    fn intern(&mut self, element: TypeId, kind: TypeKind, suffix: &str) -> TypeId {
        if let Some(index) = self.types.iter().position(|t| t.kind == kind) {
            return TypeId(index);
        }
        let element_name = self
            .get_type(element)
            .map(|t| t.name.snake_case())
            .unwrap_or_default();
        self.add_type(Type::new(format!("{element_name}_{suffix}").as_str(), kind))
    }

    pub fn get_type(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.0)
    }

    pub fn find_type(&self, name: &Name) -> Option<TypeId> {
        self.types
            .iter()
            .position(|t| &t.name == name)
            .map(TypeId)
    }

    /// All types in declaration order, built-ins first.
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.types.iter().enumerate().map(|(i, t)| (TypeId(i), t))
    }

    pub fn add_resource(&mut self, resource: Resource) -> ResourceId {
        self.resources.push(resource);
        ResourceId(self.resources.len() - 1)
    }

    pub fn get_resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.0)
    }

    pub fn get_resource_mut(&mut self, id: ResourceId) -> Option<&mut Resource> {
        self.resources.get_mut(id.0)
    }

    pub fn find_resource(&self, name: &Name) -> Option<ResourceId> {
        self.resources
            .iter()
            .position(|r| &r.name == name)
            .map(ResourceId)
    }

    pub fn resources(&self) -> impl Iterator<Item = (ResourceId, &Resource)> {
        self.resources
            .iter()
            .enumerate()
            .map(|(i, r)| (ResourceId(i), r))
    }

    /// Attach a locator to the resource `from`. Unknown resources are ignored.
    pub fn add_locator(&mut self, from: ResourceId, locator: Locator) {
        if let Some(resource) = self.resources.get_mut(from.0) {
            resource.locators.push(locator);
        }
    }

    pub fn set_root(&mut self, root: ResourceId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<ResourceId> {
        self.root
    }

    /// Every locator chain reachable from the root resource, depth first in
    /// declaration order. A locator that leads back to a resource already on
    /// the current chain is not followed.
    pub fn paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        if let Some(root) = self.root {
            let mut chain = Vec::new();
            let mut visiting = vec![root];
            self.collect_paths(root, &mut chain, &mut visiting, &mut paths);
        }
        paths
    }

    fn collect_paths(
        &self,
        from: ResourceId,
        chain: &mut Vec<Locator>,
        visiting: &mut Vec<ResourceId>,
        out: &mut Vec<Path>,
    ) {
        let Some(resource) = self.get_resource(from) else {
            return;
        };
        for locator in &resource.locators {
            if visiting.contains(&locator.target) {
                continue;
            }
            chain.push(locator.clone());
            visiting.push(locator.target);
            out.push(Path::new(chain.clone()));
            self.collect_paths(locator.target, chain, visiting, out);
            visiting.pop();
            chain.pop();
        }
    }
}
