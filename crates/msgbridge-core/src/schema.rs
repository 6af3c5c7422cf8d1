//! Read-only schema model consumed by the emitters

use crate::document::{SectionDocument, ServiceDocument};
use crate::error::{GenError, GenResult};
use crate::resolver::{TypeLookup, TypeResolver};
use crate::types::{PrimitiveKind, TypeDescriptor};
use std::collections::HashSet;

/// One field of a message, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeDescriptor,
    pub index: usize,

    /// Type token as written in the schema, e.g. `int16[3][]`
    pub type_token: String,
}

/// Parsed value of a constant
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i128),
    Float(f64),
    Bool(bool),
    String(String),
}

impl ConstantValue {
    /// Parse constant literal text for a constant of type `ty`
    pub fn parse(ty: &TypeDescriptor, text: &str) -> Result<Self, String> {
        match ty {
            TypeDescriptor::Primitive(kind) if kind.is_float() => parse_float(*kind, text.trim()).map(ConstantValue::Float),
            TypeDescriptor::Primitive(kind) => parse_int(*kind, text.trim()).map(ConstantValue::Int),
            TypeDescriptor::Bool => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(ConstantValue::Bool(true)),
                "false" | "0" => Ok(ConstantValue::Bool(false)),
                _ => Err(format!("{text:?} is not a valid bool")),
            },
            TypeDescriptor::String => Ok(ConstantValue::String(text.to_string())),
            _ => Err("constants must be numeric, bool or string".to_string()),
        }
    }
}

fn parse_int(kind: PrimitiveKind, text: &str) -> Result<i128, String> {
    let value = text
        .parse::<i128>()
        .map_err(|_| format!("{text:?} is not a valid {}", kind.name()))?;
    match kind.int_range() {
        Some((min, max)) if (min..=max).contains(&value) => Ok(value),
        _ => Err(format!("{value} is out of range for {}", kind.name())),
    }
}

fn parse_float(kind: PrimitiveKind, text: &str) -> Result<f64, String> {
    let value = text
        .parse::<f64>()
        .map_err(|_| format!("{text:?} is not a valid {}", kind.name()))?;
    // infinities and NaN are representable in both widths
    if kind == PrimitiveKind::Float32 && value.is_finite() && value.abs() > f64::from(f32::MAX) {
        return Err(format!("{value} is out of range for {}", kind.name()));
    }
    Ok(value)
}

/// A named constant declared by a message
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: String,
    pub ty: TypeDescriptor,
    pub value: ConstantValue,
}

/// A message type: ordered fields, constants and opaque metadata
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSpec {
    pub package: String,
    pub short_name: String,

    /// `package/Name`
    pub full_name: String,
    pub fields: Vec<FieldSpec>,
    pub constants: Vec<Constant>,

    /// The first field is `header` of the standard header type
    pub has_header: bool,
    pub md5sum: String,

    /// Flattened definition text, carried verbatim
    pub definition: String,
}

impl MessageSpec {
    /// Assemble a spec, rejecting duplicate field or constant names
    pub fn new(
        package: impl Into<String>,
        short_name: impl Into<String>,
        fields: Vec<FieldSpec>,
        constants: Vec<Constant>,
        md5sum: impl Into<String>,
        definition: impl Into<String>,
    ) -> GenResult<Self> {
        let package = package.into();
        let short_name = short_name.into();
        let full_name = format!("{package}/{short_name}");

        let mut seen = HashSet::new();
        for field in &fields {
            if !is_member_name(&field.name) {
                return Err(GenError::invalid_schema(
                    &full_name,
                    format!("invalid field name {:?}", field.name),
                ));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(GenError::invalid_schema(
                    &full_name,
                    format!("duplicate field {}", field.name),
                ));
            }
        }
        let mut seen = HashSet::new();
        for constant in &constants {
            if !is_member_name(&constant.name) {
                return Err(GenError::invalid_schema(
                    &full_name,
                    format!("invalid constant name {:?}", constant.name),
                ));
            }
            if !seen.insert(constant.name.as_str()) {
                return Err(GenError::invalid_schema(
                    &full_name,
                    format!("duplicate constant {}", constant.name),
                ));
            }
        }

        let has_header = fields
            .first()
            .is_some_and(|f| f.name == "header" && f.ty == TypeDescriptor::Header);

        Ok(Self {
            package,
            short_name,
            full_name,
            fields,
            constants,
            has_header,
            md5sum: md5sum.into(),
            definition: definition.into(),
        })
    }

    /// Resolve a document section into a spec
    pub fn from_section<L: TypeLookup + ?Sized>(
        package: &str,
        short_name: &str,
        section: &SectionDocument,
        resolver: &TypeResolver<'_, L>,
    ) -> GenResult<Self> {
        let full_name = format!("{package}/{short_name}");

        let fields = section
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                Ok(FieldSpec {
                    name: field.name.clone(),
                    ty: resolver.classify(&field.type_token, package)?,
                    index,
                    type_token: field.type_token.clone(),
                })
            })
            .collect::<GenResult<Vec<_>>>()?;

        let constants = section
            .constants
            .iter()
            .map(|constant| {
                let ty = resolver.classify(&constant.type_token, package)?;
                if !ty.is_constant_type() {
                    return Err(GenError::invalid_schema(
                        &full_name,
                        format!(
                            "constant {} has type {}; constants must be numeric, bool or string",
                            constant.name, constant.type_token
                        ),
                    ));
                }
                let text = constant.value_text().ok_or_else(|| {
                    GenError::invalid_schema(
                        &full_name,
                        format!("constant {} has a non-scalar value", constant.name),
                    )
                })?;
                let value = ConstantValue::parse(&ty, &text).map_err(|message| {
                    GenError::invalid_schema(&full_name, format!("constant {}: {message}", constant.name))
                })?;
                Ok(Constant {
                    name: constant.name.clone(),
                    ty,
                    value,
                })
            })
            .collect::<GenResult<Vec<_>>>()?;

        Self::new(
            package,
            short_name,
            fields,
            constants,
            section.md5sum.clone(),
            section.definition.clone(),
        )
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Distinct registered types referenced by fields, in first-seen order
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps: Vec<String> = Vec::new();
        for name in self.fields.iter().filter_map(|f| f.ty.registered_name()) {
            if !deps.contains(&name) {
                deps.push(name);
            }
        }
        deps
    }
}

/// A service: request and response messages under one name
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSpec {
    pub package: String,
    pub short_name: String,

    /// `package/Name`
    pub full_name: String,
    pub md5sum: String,

    /// `package/NameRequest`
    pub request: MessageSpec,

    /// `package/NameResponse`
    pub response: MessageSpec,
}

impl ServiceSpec {
    pub fn from_document<L: TypeLookup + ?Sized>(
        package: &str,
        doc: &ServiceDocument,
        resolver: &TypeResolver<'_, L>,
    ) -> GenResult<Self> {
        let request = MessageSpec::from_section(
            package,
            &format!("{}Request", doc.name),
            &doc.request,
            resolver,
        )?;
        let response = MessageSpec::from_section(
            package,
            &format!("{}Response", doc.name),
            &doc.response,
            resolver,
        )?;
        Ok(Self {
            package: package.to_string(),
            short_name: doc.name.clone(),
            full_name: format!("{package}/{}", doc.name),
            md5sum: doc.md5sum.clone(),
            request,
            response,
        })
    }

    /// Request then response
    pub fn messages(&self) -> [&MessageSpec; 2] {
        [&self.request, &self.response]
    }
}

fn is_member_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
