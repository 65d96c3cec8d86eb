//! Line parser for lexeme name definition files.
//!
//! One definition per line:
//!
//! ```text
//! large_unsigned_integer_number = :20b RATIONAL;
//! 'WORKING-STORAGE' = :2c4;
//! ```
//!
//! The name is either a bare token (no whitespace, no `=`) or a quoted
//! literal; the code is hexadecimal; the trailing type tag and the
//! terminating `;` are both optional.

use crate::model::{LexemeDefinition, ParseFailure};
use once_cell::sync::Lazy;
use regex::Regex;

// Quoted alternative first, so `'A B'` can never half-match as a bare token.
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:'([^']+)'|([^=\s]+))\s*=\s*:([0-9A-Fa-f]+)(?:\s+([^;]+))?\s*;?\s*$")
        .expect("definition line pattern is valid")
});

/// Parse a single definition line. Pure; the line must not contain `\n`.
pub fn parse_line(line: &str) -> Result<LexemeDefinition, ParseFailure> {
    let malformed = || ParseFailure::Malformed {
        line: line.to_string(),
    };

    let caps = LINE_RE.captures(line).ok_or_else(malformed)?;

    // Exactly one of the name groups participates in any match.
    let name = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
        .ok_or_else(malformed)?;

    let digits = &caps[3];
    let code =
        u32::from_str_radix(digits, 16).map_err(|_| ParseFailure::NumberOutOfRange {
            digits: digits.to_string(),
        })?;

    // A whitespace-only tag segment means "no tag", not an empty tag.
    let type_tag = caps
        .get(4)
        .map(|m| m.as_str().trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string);

    Ok(LexemeDefinition {
        name,
        code,
        type_tag,
    })
}
