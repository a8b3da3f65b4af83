use super::names::Name;

/// Index of a type inside the arena of its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Integer,
    Long,
    Float,
    String,
    Date,
}

impl Primitive {
    pub const ALL: [Primitive; 6] = [
        Primitive::Boolean,
        Primitive::Integer,
        Primitive::Long,
        Primitive::Float,
        Primitive::String,
        Primitive::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Boolean => "Boolean",
            Primitive::Integer => "Integer",
            Primitive::Long => "Long",
            Primitive::Float => "Float",
            Primitive::String => "String",
            Primitive::Date => "Date",
        }
    }
}

/// A named value of an enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: Name,
    pub doc: String,
}

/// A field of a struct type.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: Name,
    pub doc: String,
    pub ty: TypeId,
}

/// What a type is.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Primitive(Primitive),
    /// A value of any shape, with no fixed representation.
    Interface,
    Enum {
        values: Vec<EnumValue>,
    },
    Struct {
        attributes: Vec<Attribute>,
        /// Class types are identified objects that can also travel as links.
        class: bool,
    },
    List(TypeId),
    Map(TypeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub name: Name,
    pub doc: String,
    pub kind: TypeKind,
}

impl Type {
    pub fn new(name: impl Into<Name>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            kind,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Primitive(_) | TypeKind::Interface | TypeKind::Enum { .. }
        )
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum { .. })
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct { .. })
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, TypeKind::Struct { class: true, .. })
    }

    pub fn attributes(&self) -> &[Attribute] {
        match &self.kind {
            TypeKind::Struct { attributes, .. } => attributes,
            _ => &[],
        }
    }

    pub fn values(&self) -> &[EnumValue] {
        match &self.kind {
            TypeKind::Enum { values } => values,
            _ => &[],
        }
    }
}
