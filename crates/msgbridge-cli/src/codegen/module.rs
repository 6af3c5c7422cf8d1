//! Package includes and aggregate index files

use super::naming::to_namespace;
use msgbridge_core::{DocumentKind, GeneratorConfig};

/// Lints silenced on every generated unit through its `mod` declaration
pub const UNIT_ALLOWS: &str =
    "#[allow(unused_imports, unused_mut, non_snake_case, non_upper_case_globals, clippy::all)]";

/// Packages a unit refers to with their aliases, deduplicated in first-seen
/// order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredPackages {
    packages: Vec<(String, String)>,
}

impl RequiredPackages {
    /// Record `package` under its default alias, returning whether it was new
    pub fn require(&mut self, package: &str) -> bool {
        self.require_as(package, &to_namespace(package))
    }

    /// Record `package` under `alias`; a package keeps its first alias
    pub fn require_as(&mut self, package: &str, alias: &str) -> bool {
        if self.contains(package) {
            return false;
        }
        self.packages.push((package.to_string(), alias.to_string()));
        true
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.iter().any(|(p, _)| p == package)
    }

    /// Alias recorded for `package`
    pub fn alias(&self, package: &str) -> Option<&str> {
        self.packages
            .iter()
            .find(|(p, _)| p == package)
            .map(|(_, alias)| alias.as_str())
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.packages.iter().any(|(_, a)| a == alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// One `use` line per package, aliasing its message module
    pub fn emit_includes(&self, config: &GeneratorConfig) -> String {
        let mut code = String::new();
        for (package, alias) in &self.packages {
            code.push_str(&format!(
                "use {}::{package}::msg as {alias};\n",
                config.crate_root
            ));
        }
        code
    }
}

/// One line group of an index file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    /// A generated unit and the types it exports
    Unit { module: String, types: Vec<String> },

    /// A type provided by the runtime crate
    Runtime { name: String },
}

/// Index file declaring every unit of `package` for one document kind
pub fn emit_index(
    package: &str,
    kind: DocumentKind,
    entries: &[IndexEntry],
    config: &GeneratorConfig,
) -> String {
    let mut code = String::new();
    code.push_str(&format!(
        "// Generated by msgbridge for {package}/{}. Do not edit.\n\n",
        kind.dir_name()
    ));

    for entry in entries {
        match entry {
            IndexEntry::Unit { module, types } => {
                code.push_str(&format!("{UNIT_ALLOWS}\n"));
                code.push_str(&format!("pub mod {module};\n"));
                match types.as_slice() {
                    [single] => code.push_str(&format!("pub use self::{module}::{single};\n")),
                    many => code.push_str(&format!(
                        "pub use self::{module}::{{{}}};\n",
                        many.join(", ")
                    )),
                }
            }
            IndexEntry::Runtime { name } => {
                code.push_str(&format!("pub use {}::{name};\n", config.runtime_crate));
            }
        }
    }

    code
}
