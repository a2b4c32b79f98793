//! Record source and sink
//!
//! Reads the component catalog from a JSON array and writes enriched
//! artifacts as indented JSON.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{EnrichError, Result};
use crate::entities::component::ComponentRecord;

/// Load the catalog: a JSON array of objects
pub fn read_records(path: &Path) -> Result<Vec<ComponentRecord>> {
    let content = fs::read_to_string(path).map_err(|e| EnrichError::io(path, e))?;
    parse_records(&content)
}

/// Parse catalog text. Anything other than an array of objects is
/// rejected before any record is looked at by the rules.
pub fn parse_records(content: &str) -> Result<Vec<ComponentRecord>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| EnrichError::malformed(format!("not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(EnrichError::malformed(format!(
                "expected a JSON array of component records, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(ComponentRecord::from_map(map)),
            other => Err(EnrichError::malformed(format!(
                "record {}: expected an object, found {}",
                index,
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Serialize with two-space indentation and a trailing newline
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Write a JSON artifact. The content goes to a sibling temporary file that
/// is renamed over the target, so a failed write never leaves a truncated
/// artifact behind.
pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    write_artifacts(&[(path, to_pretty_string(value)?)])
}

/// An artifact written to its temporary sibling but not yet renamed
struct Staged<'a> {
    tmp: PathBuf,
    target: &'a Path,
    existed: bool,
}

/// Write several artifacts as one unit.
///
/// Every artifact is staged before any target is touched. When staging or
/// a rename fails, the temporary files are removed along with any target
/// this call created, and the first error is returned.
pub fn write_artifacts(artifacts: &[(&Path, String)]) -> Result<()> {
    let mut staged = Vec::with_capacity(artifacts.len());
    for (path, content) in artifacts {
        match stage(path, content) {
            Ok(artifact) => staged.push(artifact),
            Err(e) => {
                discard(&staged);
                return Err(e);
            }
        }
    }

    for (committed, artifact) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(&artifact.tmp, artifact.target) {
            discard(&staged[committed..]);
            for done in staged[..committed].iter().filter(|a| !a.existed) {
                let _ = fs::remove_file(done.target);
            }
            return Err(EnrichError::io(artifact.target, e));
        }
    }

    debug!(count = staged.len(), "wrote artifacts");
    Ok(())
}

fn stage<'a>(path: &'a Path, content: &str) -> Result<Staged<'a>> {
    if path.is_dir() {
        return Err(EnrichError::io(
            path,
            io::Error::other("target is a directory"),
        ));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EnrichError::io(parent, e))?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, content).map_err(|e| EnrichError::io(&tmp, e))?;
    Ok(Staged {
        tmp,
        target: path,
        existed: path.exists(),
    })
}

fn discard(staged: &[Staged<'_>]) {
    for artifact in staged {
        let _ = fs::remove_file(&artifact.tmp);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
