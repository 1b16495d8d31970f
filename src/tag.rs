use crate::error::{PublishError, Result};

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
///
/// The version core only produces the dotted-quad string; the pattern decides
/// how that string is dressed up into a tag name.
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3.4" -> "v1.2.3.4"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }

    /// Validate if a tag matches this pattern with a dotted-quad version slot
    pub fn matches(&self, tag: &str) -> Result<bool> {
        if !self.pattern.contains("{version}") {
            return Err(PublishError::tag(
                "Pattern must contain {version} placeholder",
            ));
        }

        // Escape everything, then put the version shape back in
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(\d+\.\d+\.\d+\.\d+)");

        if let Ok(re) = regex::Regex::new(&format!("^{}$", regex_pattern)) {
            Ok(re.is_match(tag))
        } else {
            Err(PublishError::tag("Invalid pattern"))
        }
    }
}
