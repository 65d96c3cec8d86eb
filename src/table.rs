//! Loads a whole definition file into a code → definition lookup table.

use crate::model::{LexemeDefinition, ParseFailure};
use crate::parser;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("line {number}: {source}")]
    Line { number: usize, source: ParseFailure },
    #[error("reading definition file")]
    Io(#[from] std::io::Error),
}

/// Per-line parse results for a whole file, paired with 1-based line
/// numbers. Blank lines and `#` comments are skipped.
///
/// Callers that want to warn and continue on bad lines consume this
/// directly; `DefinitionTable::parse` aborts on the first failure instead.
pub fn parse_lines(
    src: &str,
) -> impl Iterator<Item = (usize, Result<LexemeDefinition, ParseFailure>)> + '_ {
    src.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| (i + 1, parser::parse_line(line)))
}

/// All definitions of one file, queryable by code.
#[derive(Debug, Default)]
pub struct DefinitionTable {
    entries: Vec<LexemeDefinition>,
    by_code: HashMap<u32, usize>,
}

impl DefinitionTable {
    /// Parse the full text of a definition file. The first bad line aborts
    /// the load and reports its line number.
    pub fn parse(src: &str) -> Result<Self, TableError> {
        let mut table = DefinitionTable::default();
        for (number, parsed) in parse_lines(src) {
            let def = parsed.map_err(|source| TableError::Line { number, source })?;
            table.insert(def);
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, TableError> {
        let src = fs::read_to_string(path)?;
        Self::parse(&src)
    }

    // A re-defined code replaces the earlier entry in place.
    fn insert(&mut self, def: LexemeDefinition) {
        match self.by_code.get(&def.code) {
            Some(&idx) => self.entries[idx] = def,
            None => {
                self.by_code.insert(def.code, self.entries.len());
                self.entries.push(def);
            }
        }
    }

    pub fn get(&self, code: u32) -> Option<&LexemeDefinition> {
        self.by_code.get(&code).map(|&idx| &self.entries[idx])
    }

    pub fn name_of(&self, code: u32) -> Option<&str> {
        self.get(code).map(|def| def.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions in file order.
    pub fn definitions(&self) -> &[LexemeDefinition] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexemeDefinition> {
        self.entries.iter()
    }
}
