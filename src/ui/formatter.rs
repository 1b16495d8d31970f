//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction. The core never logs; everything the user sees goes through
//! here.

use crate::git::TagDetails;
use crate::warning::PublishWarning;
use console::style;
use time::format_description;
use time::OffsetDateTime;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a warning to the user.
pub fn display_warning(warning: &PublishWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the version transition about to be committed.
pub fn display_version_change(old_version: &str, new_version: &str) {
    println!(
        "Change version {} to {}",
        style(old_version).blue(),
        style(new_version).green()
    );
}

/// Display the git command needed to push the tag later by hand.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n\x1b[33m→\x1b[0m To push this release later, run:\n  \x1b[36mgit push {} && git push {} {}\x1b[0m",
        remote, remote, tag
    );
}

/// Render the tag history report.
///
/// One row per tag: name, annotation label, tagger, date. Tags whose label is
/// one of `release_labels` get the release color.
///
/// # Arguments
/// * `tags` - Tag details, already filtered and sorted by the caller
/// * `release_labels` - Annotation labels highlighted as releases
pub fn display_tag_history(tags: &[TagDetails], release_labels: &[String]) {
    if tags.is_empty() {
        println!("{}", style("No tags to show...").yellow());
        return;
    }

    for tag in tags {
        let is_release = release_labels
            .iter()
            .any(|label| label == tag.message.trim());

        let name = if is_release {
            style(tag.name.as_str()).green()
        } else {
            style(tag.name.as_str()).magenta()
        };

        println!(
            "{}\t{}\t{}\t{}",
            name,
            style(tag.message.as_str()).cyan(),
            style(tag.tagger.as_str()).yellow(),
            style(format_tag_date(tag.when_unix)).blue()
        );
    }
}

/// Render a unix timestamp as "YYYY-MM-DD HH:MM", falling back to the raw
/// seconds when out of range.
pub fn format_tag_date(when_unix: i64) -> String {
    OffsetDateTime::from_unix_timestamp(when_unix)
        .ok()
        .and_then(|dt| {
            format_description::parse("[year]-[month]-[day] [hour]:[minute]")
                .ok()
                .and_then(|fmt| dt.format(&fmt).ok())
        })
        .unwrap_or_else(|| when_unix.to_string())
}
