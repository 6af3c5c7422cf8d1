//! Generate command implementation
//!
//! Loads every target document plus any `--registry` documents, builds the
//! registry once, then emits one unit per target document (or, with
//! `--generate-root`, one index per document kind). Each file succeeds or
//! fails on its own; the batch always runs to the end.

use crate::codegen::{self, IndexEntry, naming};
use anyhow::Result;
use msgbridge_core::{
    DocumentKind, GenError, GenResult, GeneratorConfig, HEADER_TYPE, SchemaDocument, SchemaFile,
    SpecRegistry,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs of one generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Documents to generate code for
    pub files: Vec<PathBuf>,

    /// Extra documents resolved against but not generated
    pub registry_files: Vec<PathBuf>,

    /// Write package indexes instead of units
    pub generate_root: bool,
}

/// Outcome of a generate run, per file
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, GenError)>,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Target documents that loaded, and the registry built from them
pub(crate) struct LoadedBatch {
    pub targets: Vec<SchemaFile>,
    pub registry: SpecRegistry,
    pub failures: Vec<(PathBuf, GenError)>,
}

impl LoadedBatch {
    /// Targets that loaded and registered
    pub fn resolved(&self) -> Vec<&SchemaFile> {
        let failed: HashSet<&Path> = self.failures.iter().map(|(p, _)| p.as_path()).collect();
        self.targets
            .iter()
            .filter(|file| !failed.contains(file.path.as_path()))
            .collect()
    }
}

/// Load targets and registry documents and resolve them together
///
/// Failures of target files are collected; registry documents that fail are
/// only logged, since nothing is generated for them.
pub(crate) fn load_batch(
    files: &[PathBuf],
    registry_files: &[PathBuf],
    config: &GeneratorConfig,
) -> LoadedBatch {
    let mut failures = Vec::new();

    let mut targets = Vec::new();
    for path in files {
        match SchemaFile::load(path) {
            Ok(file) => targets.push(file),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "Failed to load schema");
                failures.push((path.clone(), err));
            }
        }
    }

    let mut all = targets.clone();
    for path in registry_files {
        match SchemaFile::load(path) {
            Ok(file) => all.push(file),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Skipping registry document");
            }
        }
    }

    let (registry, rejected) = SpecRegistry::build(&all, &config.header_package);
    let target_paths: HashSet<&Path> = files.iter().map(PathBuf::as_path).collect();
    for (path, err) in rejected {
        if target_paths.contains(path.as_path()) {
            tracing::error!(path = %path.display(), error = %err, "Failed to resolve schema");
            if !failures.iter().any(|(p, _)| *p == path) {
                failures.push((path, err));
            }
        } else {
            tracing::warn!(path = %path.display(), error = %err, "Registry document rejected");
        }
    }

    tracing::debug!(
        messages = registry.messages().count(),
        services = registry.services().count(),
        "Registry built"
    );

    LoadedBatch {
        targets,
        registry,
        failures,
    }
}

/// Run the generate command
pub fn run(options: &GenerateOptions, config: &GeneratorConfig) -> Result<()> {
    let report = generate(options, config);

    println!(
        "Generated {} file(s), {} unchanged, {} skipped",
        report.written.len(),
        report.unchanged.len(),
        report.skipped.len()
    );

    if !report.is_success() {
        for (path, err) in &report.failures {
            eprintln!("  {}: {err}", path.display());
        }
        anyhow::bail!(
            "{} of {} schema file(s) failed",
            report.failures.len(),
            options.files.len()
        );
    }

    Ok(())
}

/// Generate every target, collecting per-file outcomes
pub fn generate(options: &GenerateOptions, config: &GeneratorConfig) -> GenerateReport {
    let batch = load_batch(&options.files, &options.registry_files, config);
    let mut report = GenerateReport::default();
    let resolved = batch.resolved();

    if options.generate_root {
        // loaded targets keep input order, so the first is the first input
        // that could be read, whether or not it resolved
        write_indexes(batch.targets.first(), &resolved, config, &mut report);
    } else {
        for file in resolved {
            if file.is_header(&config.header_package) {
                tracing::info!(path = %file.path.display(), "Header is provided by the runtime, skipping");
                report.skipped.push(file.path.clone());
                continue;
            }
            let result = unit_path(file, config).and_then(|path| {
                let code = emit_unit(file, &batch.registry, config)?;
                write_output(&path, &code).map(|changed| (path, changed))
            });
            record(&mut report, &file.path, result);
        }
    }

    let mut failures = batch.failures;
    failures.append(&mut report.failures);
    report.failures = failures;
    report
}

/// Emit the unit for one document
pub fn emit_unit(
    file: &SchemaFile,
    registry: &SpecRegistry,
    config: &GeneratorConfig,
) -> GenResult<String> {
    let full_name = file.full_name();
    match &file.document {
        SchemaDocument::Message(_) => {
            let spec = registry
                .message(&full_name)
                .ok_or_else(|| GenError::SchemaResolution { token: full_name.clone() })?;
            codegen::emit_message_unit(spec, registry, config)
        }
        SchemaDocument::Service(_) => {
            let spec = registry
                .service(&full_name)
                .ok_or_else(|| GenError::SchemaResolution { token: full_name.clone() })?;
            codegen::emit_service_unit(spec, registry, config)
        }
    }
}

/// Write one index per document kind for the package of `first`, the first
/// input document
fn write_indexes(
    first: Option<&SchemaFile>,
    files: &[&SchemaFile],
    config: &GeneratorConfig,
    report: &mut GenerateReport,
) {
    let Some(first) = first else {
        tracing::warn!("No loaded schema files to index");
        return;
    };
    let package = first.package.as_str();

    for kind in [DocumentKind::Message, DocumentKind::Service] {
        let mut entries = Vec::new();
        for file in files.iter().filter(|file| file.kind() == kind) {
            if file.package != package {
                tracing::warn!(
                    path = %file.path.display(),
                    package = %file.package,
                    index = %package,
                    "Skipping document from another package"
                );
                report.skipped.push(file.path.clone());
                continue;
            }
            entries.push(index_entry(file, config));
        }
        if entries.is_empty() {
            continue;
        }
        entries.sort_by(|a, b| entry_key(a).cmp(entry_key(b)));
        entries.dedup();

        let result = package_dir(first, config).and_then(|dir| {
            let path = dir.join(format!("{}.rs", kind.dir_name()));
            let code = codegen::emit_index(package, kind, &entries, config);
            write_output(&path, &code).map(|changed| (path, changed))
        });
        record(report, &first.path, result);
    }
}

fn index_entry(file: &SchemaFile, config: &GeneratorConfig) -> IndexEntry {
    let name = file.name();
    if file.is_header(&config.header_package) {
        return IndexEntry::Runtime {
            name: HEADER_TYPE.to_string(),
        };
    }
    let types = match file.kind() {
        DocumentKind::Message => vec![name.to_string()],
        DocumentKind::Service => vec![
            name.to_string(),
            format!("{name}Request"),
            format!("{name}Response"),
        ],
    };
    IndexEntry::Unit {
        module: naming::module_ident(name),
        types,
    }
}

fn entry_key(entry: &IndexEntry) -> &str {
    match entry {
        IndexEntry::Unit { module, .. } => module.trim_start_matches("r#"),
        IndexEntry::Runtime { name } => name,
    }
}

fn record(report: &mut GenerateReport, source: &Path, result: GenResult<(PathBuf, bool)>) {
    match result {
        Ok((path, true)) => {
            tracing::info!(path = %path.display(), "Wrote");
            report.written.push(path);
        }
        Ok((path, false)) => {
            tracing::debug!(path = %path.display(), "Unchanged");
            report.unchanged.push(path);
        }
        Err(err) => {
            tracing::error!(path = %source.display(), error = %err, "Generation failed");
            report.failures.push((source.to_path_buf(), err));
        }
    }
}

/// `<out>/<pkg>` or `<pkg_dir>/src/<pkg>`
pub fn package_dir(file: &SchemaFile, config: &GeneratorConfig) -> GenResult<PathBuf> {
    if let Some(out) = &config.output_dir {
        return Ok(out.join(&file.package));
    }
    match &file.package_dir {
        Some(dir) => Ok(dir.join("src").join(&file.package)),
        None => Err(GenError::invalid_schema(
            file.path.display().to_string(),
            "no output directory: pass --output-dir or use the <pkg_dir>/msg/<Name>.json layout",
        )),
    }
}

/// `<package_dir>/<kind>/<snake_name>.rs`
pub fn unit_path(file: &SchemaFile, config: &GeneratorConfig) -> GenResult<PathBuf> {
    Ok(package_dir(file, config)?
        .join(file.kind().dir_name())
        .join(naming::unit_file_name(file.name())))
}

/// Write `code` to `path` unless it already holds exactly that, returning
/// whether the file changed
fn write_output(path: &Path, code: &str) -> GenResult<bool> {
    let output_error = |source| GenError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if fs::read(path).is_ok_and(|existing| existing == code.as_bytes()) {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(output_error)?;
    }
    fs::write(path, code).map_err(output_error)?;
    Ok(true)
}
