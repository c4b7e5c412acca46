//! Parsing, validation, and precedence ordering for Semantic Versioning
//! 2.0.0 version strings.
//!
//! A [`Version`] is constructed either by scanning a composite
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` string ([`Version::parse`]) or
//! from already-separated components ([`Version::from_parts`]).
//! Construction is eager and fail-fast: a `Version` that exists upholds
//! every grammar invariant, and all derived state is computed up front, so
//! values are immutable and freely shareable across threads.
//!
//! Ordering implements SemVer precedence. Build metadata never
//! participates in ordering, equality, or hashing.

mod error;
mod scanner;

pub use error::{ParseError, ValidationError};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// One dot-delimited token of a pre-release string.
///
/// Numeric identifiers have lower precedence than alphanumeric ones, and
/// alphanumeric identifiers compare by raw bytes, so the derived ordering
/// on this enum is exactly SemVer precedence for a single identifier pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    Alphanumeric(String),
}

impl Identifier {
    /// Classify an identifier that already passed grammar validation.
    fn from_validated(identifier: &str) -> Self {
        if identifier.bytes().all(|byte| byte.is_ascii_digit()) {
            if let Ok(value) = identifier.parse::<u64>() {
                return Identifier::Numeric(value);
            }
        }
        Identifier::Alphanumeric(identifier.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn is_alphanumeric(&self) -> bool {
        matches!(self, Self::Alphanumeric(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{value}"),
            Identifier::Alphanumeric(text) => write!(f, "{text}"),
        }
    }
}

/// A validated SemVer 2.0.0 version.
///
/// Equality, ordering, and hashing are defined over
/// `(major, minor, patch, pre_release)` only; build metadata and the
/// display text are carried for rendering but never compared.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: String,
    build_metadata: String,
    pre_release_identifiers: Vec<Identifier>,
    build_metadata_identifiers: Vec<String>,
    text: String,
}

impl Version {
    /// Parse a composite version string.
    ///
    /// Surrounding whitespace is trimmed; empty or whitespace-only input
    /// fails with [`ParseError::Empty`]. The trimmed input is retained
    /// verbatim as the [`Display`](fmt::Display) form.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ParseError> {
        let parts = scanner::parse(input.as_ref())?;
        Ok(Self {
            major: parts.major,
            minor: parts.minor,
            patch: parts.patch,
            pre_release: parts.pre_release.to_string(),
            build_metadata: parts.build_metadata.to_string(),
            pre_release_identifiers: parts
                .pre_release_identifiers
                .into_iter()
                .map(Identifier::from_validated)
                .collect(),
            build_metadata_identifiers: parts
                .build_metadata_identifiers
                .into_iter()
                .map(|identifier| identifier.to_string())
                .collect(),
            text: parts.text.to_string(),
        })
    }

    /// Assemble a version from already-separated components.
    ///
    /// `None` means the field is absent; a supplied field — including
    /// `Some("")` — is validated by the same identifier routine the
    /// scanner uses, with the leading-zero check applied to the
    /// pre-release field only. The canonical
    /// `{major}.{minor}.{patch}[-pre][+build]` text is synthesized as the
    /// display form and round-trips through [`Version::parse`].
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build_metadata: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let pre_release_identifiers = match pre_release {
            Some(field) => scanner::scan_field(field, true)
                .map_err(|source| ValidationError::PreRelease {
                    field: field.to_string(),
                    source,
                })?
                .into_iter()
                .map(Identifier::from_validated)
                .collect(),
            None => Vec::new(),
        };
        let build_metadata_identifiers = match build_metadata {
            Some(field) => scanner::scan_field(field, false)
                .map_err(|source| ValidationError::BuildMetadata {
                    field: field.to_string(),
                    source,
                })?
                .into_iter()
                .map(|identifier| identifier.to_string())
                .collect(),
            None => Vec::new(),
        };

        let pre_release = pre_release.unwrap_or_default().to_string();
        let build_metadata = build_metadata.unwrap_or_default().to_string();

        let mut text = format!("{major}.{minor}.{patch}");
        if !pre_release.is_empty() {
            text.push('-');
            text.push_str(&pre_release);
        }
        if !build_metadata.is_empty() {
            text.push('+');
            text.push_str(&build_metadata);
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
            pre_release_identifiers,
            build_metadata_identifiers,
            text,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The raw pre-release string, empty when absent.
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// The raw build metadata string, empty when absent.
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    /// Whether this version carries a pre-release suffix and therefore
    /// sorts below the same `major.minor.patch` without one.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// The pre-release split into identifiers, left-to-right.
    pub fn pre_release_identifiers(&self) -> &[Identifier] {
        &self.pre_release_identifiers
    }

    /// The build metadata split into identifiers, left-to-right.
    pub fn build_metadata_identifiers(&self) -> &[String] {
        &self.build_metadata_identifiers
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl Ord for Version {
    /// SemVer precedence: numeric triple first, then a release outranks
    /// any pre-release of the same triple, then pre-release identifier
    /// sequences compare pairwise with a strict prefix sorting lower.
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| {
                match (self.is_pre_release(), other.is_pre_release()) {
                    (false, false) => Ordering::Equal,
                    (false, true) => Ordering::Greater,
                    (true, false) => Ordering::Less,
                    (true, true) => self
                        .pre_release_identifiers
                        .cmp(&other.pre_release_identifiers),
                }
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Version::parse(s)
    }
}

impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}
