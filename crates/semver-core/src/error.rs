use thiserror::Error;

/// Grammar violations detected while scanning a version string.
///
/// Offsets are byte positions into the scanned text and point at the
/// character (or the end of input) where the violation was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty version string")]
    Empty,

    #[error("missing {component} component at offset {offset}")]
    MissingComponent {
        component: &'static str,
        offset: usize,
    },

    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("empty identifier at offset {offset}")]
    EmptyIdentifier { offset: usize },

    #[error("numeric value {number:?} at offset {offset} has a leading zero")]
    LeadingZero { number: String, offset: usize },

    #[error("numeric value {number:?} at offset {offset} does not fit in 64 bits")]
    NumberTooLarge { number: String, offset: usize },
}

/// Violations raised when assembling a version from already-separated
/// fields.
///
/// Distinct from [`ParseError`]: these mark a caller handing over a bad
/// discrete field, not a malformed composite string. The underlying
/// grammar error is preserved as the source, with offsets relative to the
/// offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid pre-release field {field:?}: {source}")]
    PreRelease { field: String, source: ParseError },

    #[error("invalid build metadata field {field:?}: {source}")]
    BuildMetadata { field: String, source: ParseError },
}
