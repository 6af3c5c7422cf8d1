//! Registry of resolved message and service specs
//!
//! Built once before generation and read-only afterwards. Building runs in
//! two phases: every document's name is collected first, then each document
//! is resolved against that name set. Specs whose dependencies failed, and
//! types that contain themselves, are then removed until the remaining set is
//! closed, so every registered reference left in the registry resolves.

use crate::document::{SchemaDocument, SchemaFile};
use crate::error::{GenError, GenResult};
use crate::resolver::{TypeLookup, TypeResolver};
use crate::schema::{MessageSpec, ServiceSpec};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Resolved specs keyed by `package/Name`
#[derive(Debug, Clone, Default)]
pub struct SpecRegistry {
    messages: BTreeMap<String, MessageSpec>,
    services: BTreeMap<String, ServiceSpec>,
    header_package: String,
}

impl TypeLookup for SpecRegistry {
    fn contains(&self, full_name: &str) -> bool {
        self.messages.contains_key(full_name)
    }
}

/// Per-file build failures
pub type BuildFailures = Vec<(PathBuf, GenError)>;

impl SpecRegistry {
    /// An empty registry
    pub fn new(header_package: impl Into<String>) -> Self {
        Self {
            messages: BTreeMap::new(),
            services: BTreeMap::new(),
            header_package: header_package.into(),
        }
    }

    /// Build a registry from `files`, collecting failures per file
    ///
    /// A failing file never prevents the others from registering, unless
    /// they depend on it.
    pub fn build(files: &[SchemaFile], header_package: &str) -> (Self, BuildFailures) {
        let mut registry = Self::new(header_package);
        let mut failures = Vec::new();

        // Phase 1: every message name
        let known: BTreeSet<String> = files
            .iter()
            .filter(|file| matches!(file.document, SchemaDocument::Message(_)))
            .map(SchemaFile::full_name)
            .collect();
        let resolver = TypeResolver::new(&known, header_package);

        // Phase 2: resolve each document
        let mut paths: BTreeMap<String, PathBuf> = BTreeMap::new();
        for file in files {
            let result = match &file.document {
                SchemaDocument::Message(doc) => {
                    MessageSpec::from_section(&file.package, &doc.name, &doc.body, &resolver)
                        .and_then(|spec| registry.insert_message(spec))
                }
                SchemaDocument::Service(doc) => {
                    ServiceSpec::from_document(&file.package, doc, &resolver)
                        .and_then(|spec| registry.insert_service(spec))
                }
            };
            match result {
                Ok(()) => {
                    paths
                        .entry(file.full_name())
                        .or_insert_with(|| file.path.clone());
                }
                Err(err) => {
                    tracing::debug!(path = %file.path.display(), error = %err, "Schema rejected");
                    failures.push((file.path.clone(), err));
                }
            }
        }

        for (name, err) in registry.prune() {
            if let Some(path) = paths.get(&name) {
                failures.push((path.clone(), err));
            }
        }

        (registry, failures)
    }

    /// Build a registry, failing on the first rejected file
    pub fn try_build(files: &[SchemaFile], header_package: &str) -> GenResult<Self> {
        let (registry, mut failures) = Self::build(files, header_package);
        if failures.is_empty() {
            Ok(registry)
        } else {
            Err(failures.swap_remove(0).1)
        }
    }

    fn insert_message(&mut self, spec: MessageSpec) -> GenResult<()> {
        if let Some(existing) = self.messages.get(&spec.full_name) {
            return check_duplicate(&spec.full_name, &existing.md5sum, &spec.md5sum);
        }
        self.messages.insert(spec.full_name.clone(), spec);
        Ok(())
    }

    fn insert_service(&mut self, spec: ServiceSpec) -> GenResult<()> {
        if let Some(existing) = self.services.get(&spec.full_name) {
            return check_duplicate(&spec.full_name, &existing.md5sum, &spec.md5sum);
        }
        self.services.insert(spec.full_name.clone(), spec);
        Ok(())
    }

    /// Drop specs with missing or recursive dependencies until closed
    fn prune(&mut self) -> Vec<(String, GenError)> {
        let mut removed = Vec::new();
        loop {
            let mut failed: Vec<(String, GenError)> = Vec::new();

            for spec in self.messages.values() {
                if let Some(missing) = spec.dependencies().into_iter().find(|d| !self.contains(d)) {
                    failed.push((spec.full_name.clone(), GenError::SchemaResolution { token: missing }));
                } else if let Some(chain) = self.find_cycle(&spec.full_name) {
                    failed.push((spec.full_name.clone(), GenError::RecursiveType { chain }));
                }
            }
            for spec in self.services.values() {
                let missing = spec
                    .messages()
                    .into_iter()
                    .flat_map(MessageSpec::dependencies)
                    .find(|d| !self.contains(d));
                if let Some(missing) = missing {
                    failed.push((spec.full_name.clone(), GenError::SchemaResolution { token: missing }));
                }
            }

            if failed.is_empty() {
                return removed;
            }
            for (name, _) in &failed {
                self.messages.remove(name);
                self.services.remove(name);
            }
            removed.extend(failed);
        }
    }

    /// Chain of type names leading from `start` back to itself, if any
    fn find_cycle(&self, start: &str) -> Option<String> {
        let mut path = vec![start.to_string()];
        let mut visited = BTreeSet::new();
        if self.walk(start, start, &mut path, &mut visited) {
            Some(path.join(" -> "))
        } else {
            None
        }
    }

    fn walk(
        &self,
        start: &str,
        current: &str,
        path: &mut Vec<String>,
        visited: &mut BTreeSet<String>,
    ) -> bool {
        let Some(spec) = self.messages.get(current) else {
            return false;
        };
        for dep in spec.dependencies() {
            if dep == start {
                path.push(dep);
                return true;
            }
            if visited.insert(dep.clone()) {
                path.push(dep.clone());
                if self.walk(start, &dep, path, visited) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }

    pub fn header_package(&self) -> &str {
        &self.header_package
    }

    pub fn message(&self, full_name: &str) -> Option<&MessageSpec> {
        self.messages.get(full_name)
    }

    pub fn service(&self, full_name: &str) -> Option<&ServiceSpec> {
        self.services.get(full_name)
    }

    /// Look up a registered type, failing with [`GenError::SchemaResolution`]
    pub fn resolve(&self, package: &str, name: &str) -> GenResult<&MessageSpec> {
        let full_name = format!("{package}/{name}");
        self.messages
            .get(&full_name)
            .ok_or(GenError::SchemaResolution { token: full_name })
    }

    pub fn messages(&self) -> impl Iterator<Item = &MessageSpec> {
        self.messages.values()
    }

    pub fn services(&self) -> impl Iterator<Item = &ServiceSpec> {
        self.services.values()
    }

    /// A message or a service request/response by full name
    pub fn find_message(&self, full_name: &str) -> Option<&MessageSpec> {
        self.messages.get(full_name).or_else(|| {
            self.services
                .values()
                .flat_map(|s| s.messages())
                .find(|m| m.full_name == full_name)
        })
    }

    pub fn len(&self) -> usize {
        self.messages.len() + self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.services.is_empty()
    }
}

fn check_duplicate(full_name: &str, existing: &str, incoming: &str) -> GenResult<()> {
    if existing == incoming {
        tracing::debug!(type_name = full_name, "Ignoring identical duplicate definition");
        Ok(())
    } else {
        Err(GenError::invalid_schema(
            full_name,
            format!("conflicting definitions (md5 {existing} vs {incoming})"),
        ))
    }
}
