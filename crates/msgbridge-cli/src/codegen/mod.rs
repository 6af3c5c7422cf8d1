//! Rust code generation from resolved message and service specs.
//!
//! # Architecture
//!
//! ```text
//! schema documents (JSON)
//!     ↓
//!  [SpecRegistry]  msgbridge-core: resolve tokens, reject cycles
//!     ↓
//!  MessageSpec / ServiceSpec
//!     ↓
//!  [UnitContext]   one per emitted unit
//!     ├─→ rust_types   field types
//!     ├─→ defaults     zero-value literals
//!     ├─→ constructor  Default impl, ACCESSORS, construct
//!     ├─→ codec        encode / decode
//!     └─→ module       includes and package index
//! ```
//!
//! Every routine walks the [`TypeDescriptor`](msgbridge_core::TypeDescriptor)
//! enum with one exhaustive match, so a new kind fails to compile until each
//! emitter handles it.
//!
//! Generated units reference other packages through aliases
//! (`use crate::geometry_msgs::msg as GeometryMsgs;`). The aliases a unit
//! needs are only known once its body is emitted, so the body is built first
//! and the includes are prepended.

pub mod codec;
pub mod constructor;
pub mod defaults;
pub mod message;
pub mod module;
pub mod naming;
pub mod rust_types;

pub use message::{emit_message_unit, emit_service_unit};
pub use module::{IndexEntry, RequiredPackages, emit_index};

use msgbridge_core::{GeneratorConfig, SpecRegistry};

/// Prelude items a generated type name must never take
///
/// `Time`, `Duration` and `WireString` may be shadowed; see
/// [`UnitContext::runtime_type`].
const RESERVED_RUNTIME_NAMES: &[&str] = &[
    "Args",
    "ConstructError",
    "ConstructMode",
    "FieldAccessor",
    "FromValue",
    "Message",
    "ServiceDefinition",
    "ToValue",
    "Value",
    "ValueError",
    "WireError",
    "WireReader",
    "WireWriter",
];

/// Per-unit emission state
///
/// Holds the read-only registry and config plus the unit's
/// [`RequiredPackages`], the only state that changes while a unit is emitted.
#[derive(Debug)]
pub struct UnitContext<'a> {
    pub registry: &'a SpecRegistry,
    pub config: &'a GeneratorConfig,
    pub required: RequiredPackages,
    local_types: Vec<String>,
}

impl<'a> UnitContext<'a> {
    pub fn new(registry: &'a SpecRegistry, config: &'a GeneratorConfig) -> Self {
        Self {
            registry,
            config,
            required: RequiredPackages::default(),
            local_types: Vec::new(),
        }
    }

    /// Record a type name defined by this unit
    pub fn define_local(&mut self, name: &str) {
        self.local_types.push(name.to_string());
    }

    /// Alias for `package`, recording it as required by this unit
    ///
    /// The alias is the package's namespace unless that name is already a
    /// local type, a runtime name or another package's alias, in which case
    /// it gains a `Pkg` suffix.
    pub fn namespace(&mut self, package: &str) -> String {
        if let Some(alias) = self.required.alias(package) {
            return alias.to_string();
        }
        let base = naming::to_namespace(package);
        let mut alias = base.clone();
        let mut attempt = 1;
        while self.alias_taken(&alias) {
            alias = match attempt {
                1 => format!("{base}Pkg"),
                n => format!("{base}Pkg{n}"),
            };
            attempt += 1;
        }
        self.required.require_as(package, &alias);
        alias
    }

    fn alias_taken(&self, alias: &str) -> bool {
        self.local_types.iter().any(|local| local == alias)
            || RESERVED_RUNTIME_NAMES.contains(&alias)
            || matches!(alias, "Time" | "Duration" | "WireString")
            || self.required.has_alias(alias)
    }

    /// Path to a runtime type, qualified when a local type shadows it
    pub fn runtime_type(&self, name: &str) -> String {
        if self.local_types.iter().any(|local| local == name) {
            format!("{}::{name}", self.config.runtime_crate)
        } else {
            name.to_string()
        }
    }
}

/// Whether a generated type may be called `name`
pub fn is_allowed_type_name(name: &str) -> bool {
    !RESERVED_RUNTIME_NAMES.contains(&name)
}


#[cfg(test)]
pub(crate) mod test_support;
