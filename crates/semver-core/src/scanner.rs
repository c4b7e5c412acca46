//! Position-tracking scanner over the SemVer 2.0.0 grammar.
//!
//! Validation happens inline during a single left-to-right pass. The
//! discrete-field path ([`scan_field`], used by `Version::from_parts`) runs
//! the same identifier routine over the supplied field, so the
//! character-class and leading-zero rules exist exactly once in this crate.

use crate::error::ParseError;

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

/// The pieces of a successfully scanned composite version string.
///
/// Slices borrow from the (trimmed) input; identifier slices are listed
/// left-to-right in grammar order.
#[derive(Debug)]
pub(crate) struct Parts<'a> {
    pub(crate) text: &'a str,
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: &'a str,
    pub(crate) build_metadata: &'a str,
    pub(crate) pre_release_identifiers: Vec<&'a str>,
    pub(crate) build_metadata_identifiers: Vec<&'a str>,
}

/// Scan a composite `MAJOR.MINOR.PATCH[-PRE][+BUILD]` string.
///
/// Surrounding whitespace is trimmed before scanning; empty or
/// whitespace-only input fails with [`ParseError::Empty`] before any
/// scanning happens.
pub(crate) fn parse(input: &str) -> Result<Parts<'_>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut scanner = Scanner::new(input);

    let major = scanner.read_number()?;
    scanner.expect_dot("minor")?;
    let minor = scanner.read_number()?;
    scanner.expect_dot("patch")?;
    let patch = scanner.read_number()?;

    let mut pre_release = "";
    let mut build_metadata = "";
    let mut pre_release_identifiers = Vec::new();
    let mut build_metadata_identifiers = Vec::new();

    if scanner.eat(b'-') {
        let start = scanner.offset();
        pre_release_identifiers = scanner.read_identifier_run(true, Some(b'+'))?;
        pre_release = &input[start..scanner.offset()];
    }

    if scanner.eat(b'+') {
        let start = scanner.offset();
        build_metadata_identifiers = scanner.read_identifier_run(false, None)?;
        build_metadata = &input[start..scanner.offset()];
    }

    if scanner.peek().is_some() {
        return Err(scanner.unexpected_character());
    }

    Ok(Parts {
        text: input,
        major,
        minor,
        patch,
        pre_release,
        build_metadata,
        pre_release_identifiers,
        build_metadata_identifiers,
    })
}

/// Validate a discrete pre-release or build metadata field with the same
/// routine the composite scanner uses, returning its identifiers.
pub(crate) fn scan_field(field: &str, check_leading_zero: bool) -> Result<Vec<&str>, ParseError> {
    let mut scanner = Scanner::new(field);
    scanner.read_identifier_run(check_leading_zero, None)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn offset(&self) -> usize {
        self.pos
    }

    /// Error for the character under the cursor, or for running out of
    /// input. The cursor only ever advances past ASCII, so it always sits
    /// on a character boundary.
    fn unexpected_character(&self) -> ParseError {
        match self.input[self.pos..].chars().next() {
            Some(found) => ParseError::UnexpectedCharacter {
                found,
                offset: self.pos,
            },
            None => ParseError::UnexpectedEnd { offset: self.pos },
        }
    }

    /// Read one numeric component: one or more decimal digits, no leading
    /// zero unless the value is exactly `0`, accumulated digit-by-digit
    /// with checked arithmetic.
    fn read_number(&mut self) -> Result<u64, ParseError> {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_digit() {
                self.bump();
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(self.unexpected_character());
        }

        let digits = &self.input[start..self.pos];
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(ParseError::LeadingZero {
                number: digits.to_string(),
                offset: start,
            });
        }

        let mut value: u64 = 0;
        for byte in digits.bytes() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or_else(|| ParseError::NumberTooLarge {
                    number: digits.to_string(),
                    offset: start,
                })?;
        }
        Ok(value)
    }

    /// Consume the `.` separating two numeric components.
    fn expect_dot(&mut self, component: &'static str) -> Result<(), ParseError> {
        match self.peek() {
            Some(b'.') => {
                self.bump();
                Ok(())
            }
            None => Err(ParseError::MissingComponent {
                component,
                offset: self.pos,
            }),
            Some(_) => Err(self.unexpected_character()),
        }
    }

    /// Read one identifier: non-empty, every byte in `[0-9A-Za-z-]`.
    ///
    /// With `check_leading_zero` set, an all-digit identifier must not
    /// start with `0` (unless it is exactly `0`) and must fit in a `u64`.
    fn read_identifier(&mut self, check_leading_zero: bool) -> Result<&'a str, ParseError> {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if is_identifier_byte(byte) {
                self.bump();
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(match self.peek() {
                Some(b'.') => ParseError::EmptyIdentifier { offset: self.pos },
                _ => self.unexpected_character(),
            });
        }

        let identifier = &self.input[start..self.pos];
        if check_leading_zero && identifier.bytes().all(|byte| byte.is_ascii_digit()) {
            if identifier.len() > 1 && identifier.starts_with('0') {
                return Err(ParseError::LeadingZero {
                    number: identifier.to_string(),
                    offset: start,
                });
            }
            if identifier.parse::<u64>().is_err() {
                return Err(ParseError::NumberTooLarge {
                    number: identifier.to_string(),
                    offset: start,
                });
            }
        }
        Ok(identifier)
    }

    /// Read a dot-delimited identifier run until `terminator` or end of
    /// input.
    fn read_identifier_run(
        &mut self,
        check_leading_zero: bool,
        terminator: Option<u8>,
    ) -> Result<Vec<&'a str>, ParseError> {
        let mut identifiers = Vec::new();
        loop {
            identifiers.push(self.read_identifier(check_leading_zero)?);
            match self.peek() {
                Some(b'.') => self.bump(),
                None => break,
                Some(byte) => {
                    if terminator == Some(byte) {
                        break;
                    }
                    return Err(self.unexpected_character());
                }
            }
        }
        Ok(identifiers)
    }
}
