use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version compiled into this binary. Kept in sync with `Cargo.toml`.
pub const LOCAL_VERSION: Version = Version::new(1, 2, 11);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

/// How a remote version is judged against the local one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Newer as soon as any single component is greater than its local
    /// counterpart, regardless of the more significant ones.
    #[default]
    AnyComponent,
    /// Plain most-significant-first ordering.
    Lexicographic,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("expected 3 dot-separated components, found {found}")]
    WrongArity { found: usize },
    #[error("invalid {component} component {value:?}: {source}")]
    InvalidComponent {
        component: &'static str,
        value: String,
        source: ParseIntError,
    },
}

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn is_newer_than(&self, local: &Version, comparison: Comparison) -> bool {
        match comparison {
            Comparison::AnyComponent => {
                self.major > local.major || self.minor > local.minor || self.patch > local.patch
            }
            Comparison::Lexicographic => self > local,
        }
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split('.').collect();

        let [major, minor, patch] = fields.as_slice() else {
            return Err(VersionParseError::WrongArity {
                found: fields.len(),
            });
        };

        let component = |component: &'static str, value: &str| {
            value
                .parse::<u16>()
                .map_err(|source| VersionParseError::InvalidComponent {
                    component,
                    value: value.to_string(),
                    source,
                })
        };

        Ok(Self {
            major: component("major", *major)?,
            minor: component("minor", *minor)?,
            patch: component("patch", *patch)?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_version_matches_package() {
        assert_eq!(LOCAL_VERSION.to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn parses_well_formed_triples() {
        for (text, expected) in [
            ("1.3.0", Version::new(1, 3, 0)),
            ("0.0.0", Version::new(0, 0, 0)),
            ("65535.65535.65535", Version::new(65535, 65535, 65535)),
            ("1.2.12\n", Version::new(1, 2, 12)),
        ] {
            assert_eq!(text.parse::<Version>(), Ok(expected), "{text:?}");
        }
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(
            "1.2".parse::<Version>(),
            Err(VersionParseError::WrongArity { found: 2 })
        );
        assert_eq!(
            "1.2.3.4".parse::<Version>(),
            Err(VersionParseError::WrongArity { found: 4 })
        );
        assert_eq!(
            "".parse::<Version>(),
            Err(VersionParseError::WrongArity { found: 1 })
        );
    }

    #[test]
    fn rejects_bad_components() {
        for text in ["1.x.3", "1.2.65536", "-1.2.3", "1..3", "1.2.3-beta"] {
            let err = text.parse::<Version>().unwrap_err();
            assert!(
                matches!(err, VersionParseError::InvalidComponent { .. }),
                "{text:?} -> {err:?}"
            );
        }

        let err = "1.2.70000".parse::<Version>().unwrap_err();
        assert!(matches!(
            err,
            VersionParseError::InvalidComponent {
                component: "patch",
                ..
            }
        ));
    }

    #[test]
    fn never_newer_than_itself() {
        for v in [LOCAL_VERSION, Version::new(0, 0, 0), Version::new(9, 9, 9)] {
            assert!(!v.is_newer_than(&v, Comparison::AnyComponent));
            assert!(!v.is_newer_than(&v, Comparison::Lexicographic));
        }
    }

    #[test]
    fn any_component_policy() {
        let local = Version::new(1, 2, 11);

        assert!(Version::new(1, 2, 12).is_newer_than(&local, Comparison::AnyComponent));
        assert!(Version::new(2, 0, 0).is_newer_than(&local, Comparison::AnyComponent));
        assert!(!Version::new(1, 2, 10).is_newer_than(&local, Comparison::AnyComponent));

        // a lower major with a higher patch still counts
        assert!(Version::new(0, 0, 12).is_newer_than(&local, Comparison::AnyComponent));
    }

    #[test]
    fn lexicographic_policy() {
        let local = Version::new(1, 2, 11);

        assert!(Version::new(1, 2, 12).is_newer_than(&local, Comparison::Lexicographic));
        assert!(Version::new(2, 0, 0).is_newer_than(&local, Comparison::Lexicographic));
        assert!(!Version::new(0, 0, 12).is_newer_than(&local, Comparison::Lexicographic));
        assert!(!Version::new(1, 1, 99).is_newer_than(&local, Comparison::Lexicographic));
    }
}
