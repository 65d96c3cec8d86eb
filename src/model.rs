//! Core data types shared by the parser, resolver and table.

use serde::Serialize;
use thiserror::Error;

/// One parsed entry of a lexeme name definition file.
///
/// Built transiently per line and immutable afterwards; the
/// `DefinitionTable` keeps them keyed by `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexemeDefinition {
    /// Identifier for the lexeme. Quoted names arrive with the quotes
    /// already stripped; the content between them is kept verbatim.
    pub name: String,
    /// Numeric lexeme code, written as hexadecimal in the source text.
    pub code: u32,
    /// Optional trailing classifier, e.g. a data-type name.
    pub type_tag: Option<String>,
}

/// Why a single definition line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The line does not match the definition grammar at all.
    #[error("malformed definition line: `{line}`")]
    Malformed { line: String },
    /// The hex digit run is valid but too large for a 32-bit code.
    #[error("lexeme code `:{digits}` does not fit in 32 bits")]
    NumberOutOfRange { digits: String },
}
