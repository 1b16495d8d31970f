//! Main workflow orchestration logic
//!
//! Replaces the nested read -> bump -> write -> stage -> commit -> tag -> push
//! chain with an explicit sequential pipeline; each step's failure
//! short-circuits the rest. The version core stays pure - everything with a
//! side effect lives here, behind the collaborator seams.

use std::str::FromStr;

use crate::config::Config;
use crate::error::{PublishError, Result};
use crate::git::{Repository, TagDetails};
use crate::metadata::MetadataStore;
use crate::tag::TagPattern;
use crate::ui;
use crate::version::{self, BumpMode, Direction};
use crate::warning::PublishWarning;

/// Arguments for the publish workflow
///
/// Mirrors the CLI args but in a format suitable for orchestration logic,
/// so the workflow can be called programmatically without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOptions {
    /// Bump mode name or configured alias
    pub mode: String,

    /// Custom label for the tag annotation; defaults to the canonical mode name
    pub label: Option<String>,

    /// Increase or decrease the targeted slot
    pub direction: Direction,

    /// Skip confirmation prompts
    pub force: bool,

    /// Preview mode - don't touch the file or the repository
    pub dry_run: bool,
}

/// Result of a successful publish workflow
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    /// Version read from the metadata file
    pub old_version: String,

    /// Version written back after the bump
    pub new_version: String,

    /// The tag that was created
    pub tag: String,

    /// Whether commit and tag were pushed to the remote
    pub pushed: bool,
}

/// Main publish workflow
///
/// 1. Read the metadata file and extract the current version
/// 2. Resolve the mode through the alias table and bump
/// 3. Rewrite both version fields
/// 4. Stage, commit, and tag the release
/// 5. Push commit and tag to the configured remote
///
/// # Returns
/// * `Ok(Some(outcome))` - Release prepared (and pushed unless declined)
/// * `Ok(None)` - User cancelled at a prompt
/// * `Err` - A step failed; later steps were not attempted
pub fn run_publish<R: Repository>(
    repo: &R,
    store: &MetadataStore,
    config: &Config,
    opts: &PublishOptions,
) -> Result<Option<PublishOutcome>> {
    let mode = BumpMode::from_str(config.resolve_mode(&opts.mode))?;
    let label = opts.label.clone().unwrap_or_else(|| mode.name().to_string());

    let snapshot = store.read()?;
    if let Some(warning) = snapshot.field_mismatch() {
        ui::display_warning(&warning);

        if !opts.force
            && !opts.dry_run
            && !ui::confirm_action("Continue with the AssemblyVersion value?")?
        {
            return Ok(None);
        }
    }

    let current = snapshot.current_version().to_string();
    let next = version::bump(&current, mode, opts.direction)?;
    ui::display_version_change(&current, &next);

    let tag = TagPattern::new(&config.tag_pattern).format(&next);

    if repo.tag_exists(&tag)? {
        ui::display_warning(&PublishWarning::TagAlreadyExists { tag: tag.clone() });
        return Err(PublishError::tag(format!(
            "Refusing to overwrite existing tag '{}'",
            tag
        )));
    }

    if opts.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!(
            "  Step 1: would rewrite {} to version {}",
            store.path().display(),
            next
        ));
        ui::display_success(&format!(
            "  Step 2: would commit and create tag {} (label: {})",
            tag, label
        ));
        ui::display_success(&format!(
            "  Step 3: would push commit and tag to {}",
            config.remote
        ));

        return Ok(Some(PublishOutcome {
            old_version: current,
            new_version: next,
            tag,
            pushed: false,
        }));
    }

    let base = repo.head_commit_id()?;
    ui::display_status(&format!("Releasing from commit {}", base));

    store.apply(&snapshot, &next)?;
    repo.stage_path(store.path())?;
    repo.commit(&format!("Change version to: {} Mode: {}", tag, label))?;
    ui::display_success(&format!("Committed version {}", next));

    repo.create_annotated_tag(&tag, &label)?;
    ui::display_success(&format!("Created tag: {}", tag));

    let should_push = opts.force || ui::confirm_push(&tag, &config.remote)?;

    let pushed = if should_push {
        repo.push_branch(&config.remote)?;
        repo.push_tag(&config.remote, &tag)?;
        ui::display_success(&format!(
            "Pushed commit and tag {} to {}",
            tag, config.remote
        ));
        true
    } else {
        ui::formatter::display_manual_push_instruction(&tag, &config.remote);
        false
    };

    Ok(Some(PublishOutcome {
        old_version: current,
        new_version: next,
        tag,
        pushed,
    }))
}

/// Tag history report
///
/// Lists tags filtered by an optional substring, newest first, truncated to
/// `count` (or the configured default).
pub fn run_history<R: Repository>(
    repo: &R,
    config: &Config,
    count: Option<usize>,
    search: Option<&str>,
) -> Result<()> {
    let tags = select_history_tags(
        repo.list_tag_details()?,
        count.unwrap_or(config.history.count),
        search,
    );

    ui::display_tag_history(&tags, &config.history.release_labels);
    Ok(())
}

/// Filter, sort, and truncate tags for the history report.
///
/// Keeps tags whose name contains `search` (when given), newest first,
/// at most `count` entries.
pub fn select_history_tags(
    mut tags: Vec<TagDetails>,
    count: usize,
    search: Option<&str>,
) -> Vec<TagDetails> {
    if let Some(needle) = search {
        tags.retain(|tag| tag.name.contains(needle));
    }

    tags.sort_by(|a, b| b.when_unix.cmp(&a.when_unix));
    tags.truncate(count);
    tags
}
