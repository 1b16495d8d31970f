//! Dotted-quad version arithmetic.
//!
//! Assembly metadata carries four-component versions
//! (`major.minor.build.revision`). Bumping a component cascades a reset to
//! zero on every component of lower significance.

use crate::error::{PublishError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Four-component assembly version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

/// The version slot targeted by a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpMode {
    Major,
    Minor,
    Build,
    Revision,
}

/// Direction of a version transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Version {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parse a version from a dotted-quad string (e.g., "2.4.0.13").
    ///
    /// Surrounding whitespace is trimmed. The input must consist of exactly
    /// four dot-separated non-negative integers; anything else is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();

        let matches_shape = Regex::new(r"^\d+\.\d+\.\d+\.\d+$")
            .map(|re| re.is_match(trimmed))
            .unwrap_or(false);
        if !matches_shape {
            return Err(PublishError::version(format!(
                "'{}' - expected four dot-separated numbers (W.X.Y.Z)",
                text.trim()
            )));
        }

        let parts: Vec<&str> = trimmed.split('.').collect();

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| PublishError::version(format!("Invalid major component: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| PublishError::version(format!("Invalid minor component: {}", parts[1])))?;
        let build = parts[2]
            .parse::<u32>()
            .map_err(|_| PublishError::version(format!("Invalid build component: {}", parts[2])))?;
        let revision = parts[3].parse::<u32>().map_err(|_| {
            PublishError::version(format!("Invalid revision component: {}", parts[3]))
        })?;

        Ok(Version {
            major,
            minor,
            build,
            revision,
        })
    }

    /// Apply a bump to the slot named by `mode`, cascading a reset to zero on
    /// every lower-order component. Components above the bumped slot are left
    /// untouched.
    ///
    /// A decrease on a component already at zero clamps at zero, so all four
    /// components stay non-negative after any transition.
    pub fn bump(&self, mode: BumpMode, direction: Direction) -> Self {
        let step = |component: u32| match direction {
            Direction::Increase => component + 1,
            Direction::Decrease => component.saturating_sub(1),
        };

        match mode {
            BumpMode::Major => Version {
                major: step(self.major),
                minor: 0,
                build: 0,
                revision: 0,
            },
            BumpMode::Minor => Version {
                major: self.major,
                minor: step(self.minor),
                build: 0,
                revision: 0,
            },
            BumpMode::Build => Version {
                major: self.major,
                minor: self.minor,
                build: step(self.build),
                revision: 0,
            },
            BumpMode::Revision => Version {
                major: self.major,
                minor: self.minor,
                build: self.build,
                revision: step(self.revision),
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl BumpMode {
    /// Slot name as it appears in commit messages and tag annotations
    pub fn name(&self) -> &'static str {
        match self {
            BumpMode::Major => "major",
            BumpMode::Minor => "minor",
            BumpMode::Build => "build",
            BumpMode::Revision => "revision",
        }
    }
}

impl FromStr for BumpMode {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpMode::Major),
            "minor" => Ok(BumpMode::Minor),
            "build" => Ok(BumpMode::Build),
            "revision" => Ok(BumpMode::Revision),
            other => Err(PublishError::mode(other.to_string())),
        }
    }
}

impl fmt::Display for BumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse `current`, apply the transition, and serialize the result.
pub fn bump(current: &str, mode: BumpMode, direction: Direction) -> Result<String> {
    Ok(Version::parse(current)?.bump(mode, direction).to_string())
}

/// Increase the slot named by `mode`
pub fn up(current: &str, mode: BumpMode) -> Result<String> {
    bump(current, mode, Direction::Increase)
}

/// Decrease the slot named by `mode`
pub fn down(current: &str, mode: BumpMode) -> Result<String> {
    bump(current, mode, Direction::Decrease)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("2.4.0.13").unwrap();
        assert_eq!(v.major, 2);
        assert_eq!(v.minor, 4);
        assert_eq!(v.build, 0);
        assert_eq!(v.revision, 13);
    }

    #[test]
    fn test_version_parse_trims_whitespace() {
        let v = Version::parse("  1.2.3.4\n").unwrap();
        assert_eq!(v, Version::new(1, 2, 3, 4));
    }

    #[test]
    fn test_version_parse_three_components_rejected() {
        assert!(matches!(
            Version::parse("1.2.3"),
            Err(PublishError::Version(_))
        ));
    }

    #[test]
    fn test_version_parse_five_components_rejected() {
        assert!(Version::parse("1.2.3.4.5").is_err());
    }

    #[test]
    fn test_version_parse_non_numeric_rejected() {
        assert!(matches!(
            Version::parse("a.b.c.d"),
            Err(PublishError::Version(_))
        ));
        assert!(Version::parse("1.2.3.x").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_negative_rejected() {
        assert!(Version::parse("-1.2.3.4").is_err());
    }

    #[test]
    fn test_round_trip_canonicalizes_leading_zeros() {
        let v = Version::parse("01.002.0.09").unwrap();
        assert_eq!(v.to_string(), "1.2.0.9");
    }

    #[test]
    fn test_up_major_cascades() {
        assert_eq!(up("2.4.0.13", BumpMode::Major).unwrap(), "3.0.0.0");
    }

    #[test]
    fn test_up_minor_cascades() {
        assert_eq!(up("2.4.0.13", BumpMode::Minor).unwrap(), "2.5.0.0");
    }

    #[test]
    fn test_up_build_cascades() {
        assert_eq!(up("2.4.0.13", BumpMode::Build).unwrap(), "2.4.1.0");
    }

    #[test]
    fn test_up_revision_no_cascade() {
        assert_eq!(up("2.4.0.13", BumpMode::Revision).unwrap(), "2.4.0.14");
    }

    #[test]
    fn test_up_from_zero() {
        assert_eq!(up("0.0.0.0", BumpMode::Major).unwrap(), "1.0.0.0");
    }

    #[test]
    fn test_down_revision() {
        assert_eq!(down("2.4.0.13", BumpMode::Revision).unwrap(), "2.4.0.12");
    }

    #[test]
    fn test_down_clamps_at_zero() {
        assert_eq!(down("1.0.0.0", BumpMode::Minor).unwrap(), "1.0.0.0");
        assert_eq!(down("0.0.0.0", BumpMode::Major).unwrap(), "0.0.0.0");
    }

    #[test]
    fn test_down_after_up_is_identity() {
        // Holds when the bumped slot does not hit the zero clamp and the
        // slots below it are already zero (the up cascade wipes them).
        for mode in [
            BumpMode::Major,
            BumpMode::Minor,
            BumpMode::Build,
            BumpMode::Revision,
        ] {
            let start = "3.0.0.0";
            let bumped = up(start, mode).unwrap();
            let reverted = down(&bumped, mode).unwrap();
            assert_eq!(
                reverted, start,
                "down(up({}, {})) should return the original",
                start, mode
            );
        }
    }

    #[test]
    fn test_lower_bumps_never_touch_higher_slots() {
        for mode in [BumpMode::Build, BumpMode::Revision] {
            let v = Version::parse("7.3.2.9").unwrap().bump(mode, Direction::Increase);
            assert_eq!(v.major, 7);
            assert_eq!(v.minor, 3);
        }
    }

    #[test]
    fn test_bump_mode_from_str() {
        assert_eq!("major".parse::<BumpMode>().unwrap(), BumpMode::Major);
        assert_eq!("revision".parse::<BumpMode>().unwrap(), BumpMode::Revision);
    }

    #[test]
    fn test_bump_mode_unknown_rejected() {
        assert!(matches!(
            "epoch".parse::<BumpMode>(),
            Err(PublishError::Mode(_))
        ));
        // Canonical names only; aliasing is the caller's job
        assert!("patch".parse::<BumpMode>().is_err());
        assert!("Major".parse::<BumpMode>().is_err());
    }

    #[test]
    fn test_bump_string_entry_point() {
        assert_eq!(
            bump("1.0.0.0", BumpMode::Revision, Direction::Increase).unwrap(),
            "1.0.0.1"
        );
        assert!(bump("1.0.0", BumpMode::Major, Direction::Increase).is_err());
    }
}
