//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, display_tag_history, display_version_change,
    display_warning,
};

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Displays the given prompt and accepts "y" or "yes" (case-insensitive) as
/// confirmation. Default is "no" if user presses Enter.
///
/// # Arguments
/// * `prompt` - The prompt message to display (without the "(y/N): " suffix)
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
/// * `Err` - If input error occurs
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Prompts user to confirm pushing the release to a remote.
///
/// Default is to push (user must enter 'n' or 'no' to decline).
///
/// # Arguments
/// * `tag` - The tag that was created locally
/// * `remote` - The remote name (e.g., "origin")
///
/// # Returns
/// * `Ok(true)` - If user confirms (or presses Enter)
/// * `Ok(false)` - If user enters 'n' or 'no'
/// * `Err` - If input error occurs
pub fn confirm_push(tag: &str, remote: &str) -> Result<bool> {
    print!(
        "\nTag '{}' created locally. Push commit and tag to '{}' (Y/n): ",
        tag, remote
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(!(response == "n" || response == "no"))
}
