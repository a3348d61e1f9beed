//! Export of the catalog metadata for the visualization frontend.
//!
//! The metadata of every registered algorithm is written as one JSON array. Optionally each
//! algorithm with a sample input is executed once and its input and output are written to
//! `<examples_dir>/<name>.json`.

use crate::error::{Error, Result};
use crate::meta::AlgorithmMeta;
use crate::registry::Registry;
use log::{info, warn};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Where and what to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Path of the metadata JSON array
    pub output: PathBuf,
    /// Directory receiving one sample file per algorithm
    pub examples_dir: PathBuf,
    /// Whether to run the sample inputs
    pub samples: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public/algorithms.json"),
            examples_dir: PathBuf::from("public/examples"),
            samples: false,
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// Write the metadata of all registered algorithms to `path`, in registration order
pub fn export_metadata(registry: &Registry, path: &Path) -> Result<()> {
    let metadata = registry.list_algorithms(None);
    write_json(path, &metadata)?;
    info!("wrote metadata of {} algorithms to {}", metadata.len(), path.display());
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "algorithm panicked".to_string()
    }
}

/// Execute the algorithm described by `meta` on its sample input.
///
/// Failures never propagate: errors and panics are recorded as `{"error": message}`, so a
/// single broken sample cannot abort the export. An algorithm without sample input runs on an
/// empty object.
pub fn run_sample(registry: &Registry, meta: &AlgorithmMeta) -> Value {
    let input = Value::Object(meta.sample_input().cloned().unwrap_or_default());
    // algorithms are stateless, nothing is left half updated after an unwind
    let run = panic::catch_unwind(AssertUnwindSafe(|| registry.invoke(&meta.name, &input)));
    let message = match run {
        Ok(Ok(output)) => return output,
        Ok(Err(err)) => err.to_string(),
        Err(payload) => format!("{} panicked: {}", meta.name, panic_message(payload.as_ref())),
    };
    warn!("sample run of {} failed: {}", meta.name, message);
    json!({ "error": message })
}

/// Run every sample input and write `{input, output}` to `<dir>/<name>.json`.
/// Returns the number of files written.
pub fn export_samples(registry: &Registry, dir: &Path) -> Result<usize> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = 0;
    for meta in registry.list_algorithms(None) {
        let input = match meta.sample_input() {
            Some(input) => input,
            None => continue,
        };

        let mut record = Map::new();
        record.insert("input".into(), Value::Object(input.clone()));
        record.insert("output".into(), run_sample(registry, meta));

        let path = dir.join(format!("{}.json", meta.name));
        write_json(&path, &record)?;
        info!("wrote sample of {} to {}", meta.name, path.display());
        written += 1;
    }
    Ok(written)
}

/// Run a full export as configured. The examples directory is created even when samples
/// are disabled.
pub fn export(registry: &Registry, config: &ExportConfig) -> Result<()> {
    export_metadata(registry, &config.output)?;
    if config.samples {
        let count = export_samples(registry, &config.examples_dir)?;
        info!("exported {} samples", count);
    } else {
        fs::create_dir_all(&config.examples_dir).map_err(|e| Error::io(&config.examples_dir, e))?;
    }
    Ok(())
}
