//! Incremental construction of generated documents.
//!
//! Generators describe a document as nested objects and arrays through
//! [`ObjectWriter`] and [`ArrayWriter`]. Nested scopes are opened with
//! closures, so every object and array is closed when its closure returns and
//! malformed nesting can't be expressed. The finished tree is serialized once,
//! by [`Buffer::write`].

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{BuildError, GenerateError};

/// A node of a generated document. Object keys keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    String(String),
    Bool(bool),
    Object(IndexMap<String, Node>),
    Array(Vec<Node>),
}

impl Node {
    pub fn as_object(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(value) => Some(value),
            _ => None,
        }
    }

    /// Follow a sequence of object keys.
    pub fn pointer(&self, keys: &[&str]) -> Option<&Node> {
        keys.iter()
            .try_fold(self, |node, key| node.as_object()?.get(*key))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

/// Writes the fields of an open object.
pub struct ObjectWriter<'a> {
    fields: &'a mut IndexMap<String, Node>,
}

impl<'a> ObjectWriter<'a> {
    pub fn new(fields: &'a mut IndexMap<String, Node>) -> Self {
        Self { fields }
    }

    pub fn field(&mut self, key: &str, value: impl Into<Node>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Open the object stored under `key`. An object already stored under the
    /// key is reopened and extended.
    pub fn object(&mut self, key: &str, scope: impl FnOnce(&mut ObjectWriter<'_>)) {
        let slot = self
            .fields
            .entry(key.to_string())
            .or_insert_with(|| Node::Object(IndexMap::new()));
        if !matches!(slot, Node::Object(_)) {
            *slot = Node::Object(IndexMap::new());
        }
        if let Node::Object(fields) = slot {
            scope(&mut ObjectWriter::new(fields));
        }
    }

    /// Open the array stored under `key`. An array already stored under the
    /// key is reopened and appended to.
    pub fn array(&mut self, key: &str, scope: impl FnOnce(&mut ArrayWriter<'_>)) {
        let slot = self
            .fields
            .entry(key.to_string())
            .or_insert_with(|| Node::Array(Vec::new()));
        if !matches!(slot, Node::Array(_)) {
            *slot = Node::Array(Vec::new());
        }
        if let Node::Array(items) = slot {
            scope(&mut ArrayWriter::new(items));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Writes the items of an open array.
pub struct ArrayWriter<'a> {
    items: &'a mut Vec<Node>,
}

impl<'a> ArrayWriter<'a> {
    pub fn new(items: &'a mut Vec<Node>) -> Self {
        Self { items }
    }

    pub fn item(&mut self, value: impl Into<Node>) {
        self.items.push(value.into());
    }

    pub fn object(&mut self, scope: impl FnOnce(&mut ObjectWriter<'_>)) {
        let mut fields = IndexMap::new();
        scope(&mut ObjectWriter::new(&mut fields));
        self.items.push(Node::Object(fields));
    }

    pub fn array(&mut self, scope: impl FnOnce(&mut ArrayWriter<'_>)) {
        let mut items = Vec::new();
        scope(&mut ArrayWriter::new(&mut items));
        self.items.push(Node::Array(items));
    }
}

/// Collects one generated document and writes it to
/// `<output>/<package>/<name>.<extension>`.
#[derive(Debug)]
pub struct Buffer {
    output: PathBuf,
    package: String,
    name: String,
    format: OutputFormat,
    root: IndexMap<String, Node>,
}

impl Buffer {
    pub fn builder() -> BufferBuilder {
        BufferBuilder::default()
    }

    /// Writer for the top-level object of the document.
    pub fn root(&mut self) -> ObjectWriter<'_> {
        ObjectWriter::new(&mut self.root)
    }

    /// The document built so far.
    pub fn document(&self) -> Node {
        Node::Object(self.root.clone())
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Where [`Buffer::write`] puts the document.
    pub fn file_path(&self) -> PathBuf {
        let mut path = self.output.clone();
        for part in self.package.split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
        path.push(format!("{}.{}", self.name, self.format.extension()));
        path
    }

    /// Serialize the document in the configured format.
    pub fn render(&self) -> Result<String, GenerateError> {
        let mut text = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&self.root)?,
            OutputFormat::Yaml => serde_yaml_ng::to_string(&self.root)?,
        };
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }

    /// Serialize the document and persist it, returning the written path.
    pub fn write(&self) -> Result<PathBuf, GenerateError> {
        let path = self.file_path();
        let text = self.render()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, text).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote {}", path.display());
        Ok(path)
    }
}

#[derive(Debug, Default)]
pub struct BufferBuilder {
    output: Option<PathBuf>,
    package: Option<String>,
    name: Option<String>,
    format: OutputFormat,
}

impl BufferBuilder {
    /// Output directory.
    pub fn output(mut self, value: impl AsRef<Path>) -> Self {
        self.output = Some(value.as_ref().to_path_buf());
        self
    }

    /// Package path, relative to the output directory.
    pub fn package(mut self, value: impl Into<String>) -> Self {
        self.package = Some(value.into());
        self
    }

    /// Base name of the generated file, `openapi` by default.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn format(mut self, value: OutputFormat) -> Self {
        self.format = value;
        self
    }

    pub fn build(self) -> Result<Buffer, BuildError> {
        let output = self
            .output
            .filter(|o| !o.as_os_str().is_empty())
            .ok_or(BuildError("output directory"))?;
        let package = self.package.ok_or(BuildError("package"))?;
        Ok(Buffer {
            output,
            package,
            name: self.name.unwrap_or_else(|| "openapi".to_string()),
            format: self.format,
            root: IndexMap::new(),
        })
    }
}
