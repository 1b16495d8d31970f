use std::fmt;

/// Non-fatal conditions met while preparing a release.
/// These are reported to the user, who decides whether to continue.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishWarning {
    /// The two metadata version fields hold different values
    VersionFieldMismatch {
        assembly_version: String,
        file_version: String,
    },
    /// The computed tag name already exists in the repository
    TagAlreadyExists { tag: String },
}

impl fmt::Display for PublishWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishWarning::VersionFieldMismatch {
                assembly_version,
                file_version,
            } => {
                write!(
                    f,
                    "AssemblyVersion '{}' and AssemblyFileVersion '{}' disagree; both will be set to the bumped version",
                    assembly_version, file_version
                )
            }
            PublishWarning::TagAlreadyExists { tag } => {
                write!(f, "Tag '{}' already exists in this repository", tag)
            }
        }
    }
}
