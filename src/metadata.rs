//! Assembly metadata file access.
//!
//! The metadata file carries two tagged fields, each holding a dotted-quad
//! version string:
//!
//! ```text
//! [assembly: AssemblyVersion("1.2.0.4")]
//! [assembly: AssemblyFileVersion("1.2.0.4")]
//! ```
//!
//! Reading extracts both values; applying a bump substitutes the new version
//! into both fields so they converge even if they disagreed before.

use crate::error::{PublishError, Result};
use crate::warning::PublishWarning;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

const ASSEMBLY_VERSION_FIELD: &str = "AssemblyVersion";
const ASSEMBLY_FILE_VERSION_FIELD: &str = "AssemblyFileVersion";

/// Reads and rewrites the assembly metadata file
pub struct MetadataStore {
    path: PathBuf,
}

/// File content captured at read time, with both version fields extracted
#[derive(Debug, Clone)]
pub struct MetadataSnapshot {
    content: String,
    pub assembly_version: String,
    pub file_version: String,
}

impl MetadataStore {
    /// Create a store for the metadata file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MetadataStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and extract both tagged version fields.
    ///
    /// # Returns
    /// * `Ok(MetadataSnapshot)` - Content plus both extracted versions
    /// * `Err` - If the file cannot be read or either field is missing
    pub fn read(&self) -> Result<MetadataSnapshot> {
        let content = fs::read_to_string(&self.path)?;

        let assembly_version = extract_field(&content, ASSEMBLY_VERSION_FIELD)?;
        let file_version = extract_field(&content, ASSEMBLY_FILE_VERSION_FIELD)?;

        Ok(MetadataSnapshot {
            content,
            assembly_version,
            file_version,
        })
    }

    /// Substitute `new_version` into both tagged fields and write the file back.
    pub fn apply(&self, snapshot: &MetadataSnapshot, new_version: &str) -> Result<()> {
        let updated = substitute_field(&snapshot.content, ASSEMBLY_VERSION_FIELD, new_version)?;
        let updated = substitute_field(&updated, ASSEMBLY_FILE_VERSION_FIELD, new_version)?;

        fs::write(&self.path, updated)?;
        Ok(())
    }
}

impl MetadataSnapshot {
    /// The version string handed to the bump core.
    ///
    /// `AssemblyVersion` is authoritative when the two fields disagree.
    pub fn current_version(&self) -> &str {
        &self.assembly_version
    }

    /// Report when the two fields hold different versions
    pub fn field_mismatch(&self) -> Option<PublishWarning> {
        if self.assembly_version != self.file_version {
            Some(PublishWarning::VersionFieldMismatch {
                assembly_version: self.assembly_version.clone(),
                file_version: self.file_version.clone(),
            })
        } else {
            None
        }
    }
}

fn field_regex(field: &str) -> Result<Regex> {
    Regex::new(&format!(r#"{}\("(\d+\.\d+\.\d+\.\d+)"\)"#, field))
        .map_err(|_| PublishError::metadata(format!("Invalid pattern for field {}", field)))
}

fn extract_field(content: &str, field: &str) -> Result<String> {
    let re = field_regex(field)?;

    re.captures(content)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            PublishError::metadata(format!(
                "No {}(\"W.X.Y.Z\") field found in metadata file",
                field
            ))
        })
}

fn substitute_field(content: &str, field: &str, new_version: &str) -> Result<String> {
    let re = field_regex(field)?;
    let replacement = format!("{}(\"{}\")", field, new_version);

    Ok(re.replace(content, replacement.as_str()).into_owned())
}
