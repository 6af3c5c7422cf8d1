//! JSON schema documents handed over by the schema service
//!
//! One document per message or service:
//!
//! ```json
//! { "kind": "message", "package": "geometry_msgs", "name": "Point",
//!   "md5sum": "4a842b65f413084dc2b10fb484ea7f17",
//!   "definition": "float64 x\nfloat64 y\nfloat64 z\n",
//!   "fields": [ { "name": "x", "type": "float64" } ],
//!   "constants": [] }
//! ```
//!
//! The `package` key is optional when the file sits in the conventional
//! `<pkg_dir>/msg/<Name>.json` (or `srv/`) layout.

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Whether a document describes a message or a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Message,
    Service,
}

impl DocumentKind {
    /// Directory and index name for this kind: `msg` or `srv`
    pub fn dir_name(&self) -> &'static str {
        match self {
            DocumentKind::Message => "msg",
            DocumentKind::Service => "srv",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaDocument {
    Message(MessageDocument),
    Service(ServiceDocument),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub name: String,
    #[serde(flatten)]
    pub body: SectionDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub name: String,
    pub md5sum: String,
    pub request: SectionDocument,
    pub response: SectionDocument,
}

/// Fields, constants and opaque metadata of one message body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDocument {
    pub md5sum: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub fields: Vec<FieldDocument>,
    #[serde(default)]
    pub constants: Vec<ConstantDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_token: String,
    /// Literal text; JSON numbers and booleans are accepted as written
    pub value: serde_json::Value,
}

impl ConstantDocument {
    /// The literal as text
    pub fn value_text(&self) -> Option<String> {
        match &self.value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl SchemaDocument {
    pub fn kind(&self) -> DocumentKind {
        match self {
            SchemaDocument::Message(_) => DocumentKind::Message,
            SchemaDocument::Service(_) => DocumentKind::Service,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SchemaDocument::Message(doc) => &doc.name,
            SchemaDocument::Service(doc) => &doc.name,
        }
    }

    pub fn package(&self) -> Option<&str> {
        match self {
            SchemaDocument::Message(doc) => doc.package.as_deref(),
            SchemaDocument::Service(doc) => doc.package.as_deref(),
        }
    }
}

/// A parsed schema document and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFile {
    pub path: PathBuf,

    /// Owning package, from the document or the path layout
    pub package: String,

    /// Package directory when the path follows `<pkg_dir>/<kind>/<Name>.json`
    pub package_dir: Option<PathBuf>,

    pub document: SchemaDocument,
}

impl SchemaFile {
    /// Read and parse a schema document from disk
    pub fn load(path: &Path) -> GenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::ReadSchema {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Parse a schema document read from `path`
    pub fn parse(path: &Path, text: &str) -> GenResult<Self> {
        let document: SchemaDocument =
            serde_json::from_str(text).map_err(|source| GenError::ParseSchema {
                path: path.to_path_buf(),
                source,
            })?;

        let layout = package_from_layout(path);
        let package = match (document.package(), &layout) {
            (Some(package), Some((from_path, _))) if package != from_path => {
                tracing::debug!(
                    path = %path.display(),
                    package,
                    from_path = %from_path,
                    "Document package differs from directory layout"
                );
                package.to_string()
            }
            (Some(package), _) => package.to_string(),
            (None, Some((from_path, _))) => from_path.clone(),
            (None, None) => {
                return Err(GenError::invalid_schema(
                    path.display().to_string(),
                    "no package key and path is not <pkg_dir>/msg/<Name>.json",
                ));
            }
        };
        if !is_package_name(&package) {
            return Err(GenError::invalid_schema(
                path.display().to_string(),
                format!("invalid package name {package:?}"),
            ));
        }
        if !is_type_name(document.name()) {
            return Err(GenError::invalid_schema(
                path.display().to_string(),
                format!("invalid type name {:?}", document.name()),
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            package,
            package_dir: layout.map(|(_, dir)| dir),
            document,
        })
    }

    pub fn kind(&self) -> DocumentKind {
        self.document.kind()
    }

    pub fn name(&self) -> &str {
        self.document.name()
    }

    /// `package/Name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.package, self.name())
    }

    /// Whether this is the reserved header document provided by the runtime
    pub fn is_header(&self, header_package: &str) -> bool {
        self.kind() == DocumentKind::Message
            && self.package == header_package
            && self.name() == crate::resolver::HEADER_TYPE
    }
}

/// `(package, package_dir)` for paths shaped `<pkg_dir>/msg/<Name>.json`
fn package_from_layout(path: &Path) -> Option<(String, PathBuf)> {
    let kind_dir = path.parent()?;
    let kind = kind_dir.file_name()?.to_str()?;
    if kind != "msg" && kind != "srv" {
        return None;
    }
    let package_dir = kind_dir.parent()?;
    let package = package_dir.file_name()?.to_str()?;
    Some((package.to_string(), package_dir.to_path_buf()))
}

fn is_package_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_type_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
