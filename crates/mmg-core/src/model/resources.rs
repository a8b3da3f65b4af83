use super::names::Name;
use super::types::TypeId;

/// Index of a resource inside the arena of its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub(crate) usize);

impl ResourceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Which way a parameter travels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    In,
    Out,
    InOut,
}

impl Direction {
    pub fn is_in(&self) -> bool {
        matches!(self, Direction::In | Direction::InOut)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Direction::Out | Direction::InOut)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Name,
    pub doc: String,
    pub direction: Direction,
    pub ty: TypeId,
}

impl Parameter {
    pub fn new(name: impl Into<Name>, direction: Direction, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            direction,
            ty,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

/// The well-known method names. Anything else is an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Get,
    List,
    Add,
    Post,
    Update,
    Delete,
    Action,
}

impl MethodKind {
    pub fn from_name(name: &Name) -> Self {
        match name.as_str() {
            "get" => MethodKind::Get,
            "list" => MethodKind::List,
            "add" => MethodKind::Add,
            "post" => MethodKind::Post,
            "update" => MethodKind::Update,
            "delete" => MethodKind::Delete,
            _ => MethodKind::Action,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: Name,
    pub doc: String,
    /// Inbound and outbound parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl Method {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn kind(&self) -> MethodKind {
        MethodKind::from_name(&self.name)
    }
}

/// One step of a resource path: a fixed segment or a path variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Locator {
    pub name: Name,
    pub doc: String,
    pub variable: bool,
    pub target: ResourceId,
}

impl Locator {
    pub fn segment(name: impl Into<Name>, target: ResourceId) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            variable: false,
            target,
        }
    }

    pub fn variable(name: impl Into<Name>, target: ResourceId) -> Self {
        Self {
            variable: true,
            ..Self::segment(name, target)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub name: Name,
    pub doc: String,
    pub methods: Vec<Method>,
    pub locators: Vec<Locator>,
}

impl Resource {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            methods: Vec::new(),
            locators: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locators.push(locator);
        self
    }
}

/// A chain of locators starting at the root resource of a version.
///
/// The last locator targets the resource that owns the methods served at the
/// path.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub locators: Vec<Locator>,
}

impl Path {
    pub fn new(locators: Vec<Locator>) -> Self {
        Self { locators }
    }

    /// The resource at the end of the path, `None` for an empty path.
    pub fn target(&self) -> Option<ResourceId> {
        self.locators.last().map(|locator| locator.target)
    }
}
