//! Type descriptors for schema fields

/// Fixed-width numeric kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl PrimitiveKind {
    /// Encoded width in bytes
    pub fn width(&self) -> usize {
        match self {
            PrimitiveKind::Int8 | PrimitiveKind::UInt8 => 1,
            PrimitiveKind::Int16 | PrimitiveKind::UInt16 => 2,
            PrimitiveKind::Int32 | PrimitiveKind::UInt32 | PrimitiveKind::Float32 => 4,
            PrimitiveKind::Int64 | PrimitiveKind::UInt64 | PrimitiveKind::Float64 => 8,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Int8
                | PrimitiveKind::Int16
                | PrimitiveKind::Int32
                | PrimitiveKind::Int64
                | PrimitiveKind::Float32
                | PrimitiveKind::Float64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, PrimitiveKind::Float32 | PrimitiveKind::Float64)
    }

    /// Canonical schema spelling
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::UInt8 => "uint8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::UInt16 => "uint16",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::UInt32 => "uint32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::UInt64 => "uint64",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::Float64 => "float64",
        }
    }

    /// Inclusive value range of an integer kind, `None` for floats
    pub fn int_range(&self) -> Option<(i128, i128)> {
        let range = match self {
            PrimitiveKind::Int8 => (i128::from(i8::MIN), i128::from(i8::MAX)),
            PrimitiveKind::UInt8 => (0, i128::from(u8::MAX)),
            PrimitiveKind::Int16 => (i128::from(i16::MIN), i128::from(i16::MAX)),
            PrimitiveKind::UInt16 => (0, i128::from(u16::MAX)),
            PrimitiveKind::Int32 => (i128::from(i32::MIN), i128::from(i32::MAX)),
            PrimitiveKind::UInt32 => (0, i128::from(u32::MAX)),
            PrimitiveKind::Int64 => (i128::from(i64::MIN), i128::from(i64::MAX)),
            PrimitiveKind::UInt64 => (0, i128::from(u64::MAX)),
            PrimitiveKind::Float32 | PrimitiveKind::Float64 => return None,
        };
        Some(range)
    }
}

/// Classified type of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Bool,
    String,
    Time,
    Duration,

    /// The standard header, always encoded with its fixed layout
    Header,

    /// A sequence; the bound is advisory and never enforced on the wire
    Array {
        element: Box<TypeDescriptor>,
        fixed_length: Option<u32>,
    },

    /// A message type resolved through the registry
    Registered { package: String, name: String },
}

impl TypeDescriptor {
    pub fn array(element: TypeDescriptor, fixed_length: Option<u32>) -> Self {
        TypeDescriptor::Array {
            element: Box::new(element),
            fixed_length,
        }
    }

    pub fn registered(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDescriptor::Registered {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Map a builtin token to its descriptor
    ///
    /// `byte` is an unsigned and `char` a signed 8-bit integer.
    pub fn builtin(token: &str) -> Option<Self> {
        let kind = match token {
            "int8" | "char" => PrimitiveKind::Int8,
            "uint8" | "byte" => PrimitiveKind::UInt8,
            "int16" => PrimitiveKind::Int16,
            "uint16" => PrimitiveKind::UInt16,
            "int32" => PrimitiveKind::Int32,
            "uint32" => PrimitiveKind::UInt32,
            "int64" => PrimitiveKind::Int64,
            "uint64" => PrimitiveKind::UInt64,
            "float32" => PrimitiveKind::Float32,
            "float64" => PrimitiveKind::Float64,
            "bool" => return Some(TypeDescriptor::Bool),
            "string" => return Some(TypeDescriptor::String),
            "time" => return Some(TypeDescriptor::Time),
            "duration" => return Some(TypeDescriptor::Duration),
            _ => return None,
        };
        Some(TypeDescriptor::Primitive(kind))
    }

    /// The innermost non-array descriptor
    pub fn base(&self) -> &TypeDescriptor {
        match self {
            TypeDescriptor::Array { element, .. } => element.base(),
            other => other,
        }
    }

    /// `package/Name` of the registered type this descriptor refers to, through arrays
    pub fn registered_name(&self) -> Option<String> {
        match self.base() {
            TypeDescriptor::Registered { package, name } => Some(format!("{package}/{name}")),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array { .. })
    }

    /// Whether a constant may have this type
    pub fn is_constant_type(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Primitive(_) | TypeDescriptor::Bool | TypeDescriptor::String
        )
    }
}
