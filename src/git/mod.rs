//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations a
//! release needs, allowing for multiple implementations including real
//! repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Tag information for the history report
#[derive(Debug, Clone, PartialEq)]
pub struct TagDetails {
    /// The tag name (e.g., "v1.2.0.4")
    pub name: String,
    /// First line of the tag annotation; empty for lightweight tags
    pub message: String,
    /// Tagger name, or the target commit's author for lightweight tags
    pub tagger: String,
    /// Tag (or commit) timestamp as unix seconds
    pub when_unix: i64,
}

/// Common git operation trait for abstraction
///
/// Implementors must be `Send + Sync` so independent publishes on different
/// repositories may run in parallel.
///
/// All methods return [crate::error::Result<T>]; implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::PublishError] variants.
pub trait Repository: Send + Sync {
    /// Get the short hash of the commit at HEAD
    fn head_commit_id(&self) -> Result<String>;

    /// Stage a file for the next commit
    ///
    /// # Arguments
    /// * `path` - Path of the file, relative to the repository workdir
    fn stage_path(&self, path: &Path) -> Result<()>;

    /// Commit the staged changes with the given message
    fn commit(&self, message: &str) -> Result<()>;

    /// Create an annotated tag on HEAD
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `message` - Annotation message (carries the bump mode or label)
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Check whether a tag with the given name exists
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Push the current branch to a remote
    fn push_branch(&self, remote: &str) -> Result<()>;

    /// Push a tag to a remote
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;

    /// List every tag with the details the history report needs
    ///
    /// Order is unspecified; callers sort and filter.
    fn list_tag_details(&self) -> Result<Vec<TagDetails>>;
}
