pub mod cli;
pub mod model;
pub mod parser;
pub mod resolver;
pub mod table;

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use table::DefinitionTable;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Resolve ────────────────────────────────────────────────────
    let file_name = match &args.definitions {
        Some(name) => name.clone(),
        None => default_definitions_name(&args.input)
            .with_context(|| format!("No file stem in {}", args.input.display()))?,
    };

    let resolved = resolver::resolve_in_env(&file_name, &args.input);

    // 2. ── Load ───────────────────────────────────────────────────────
    let table = match &resolved {
        Some(hit) => {
            println!("Definition file found: {}", hit.path.display());
            DefinitionTable::load(&hit.path)
                .with_context(|| format!("Loading {}", hit.path.display()))?
        }
        None => {
            // Not fatal: extraction falls back to bare numeric codes.
            println!("No definition file `{file_name}` found in search path");
            DefinitionTable::default()
        }
    };

    // 3. ── Report ─────────────────────────────────────────────────────
    if args.dump {
        let json = serde_json::to_string_pretty(table.definitions())
            .context("Serializing definition table")?;
        println!("{json}");
    } else {
        println!("{} definitions loaded", table.len());
        for def in table.iter() {
            match &def.type_tag {
                Some(tag) => println!("  {:#06x} {} ({tag})", def.code, def.name),
                None => println!("  {:#06x} {}", def.code, def.name),
            }
        }
    }

    Ok(())
}

fn default_definitions_name(input: &Path) -> Option<String> {
    input
        .file_stem()
        .map(|stem| format!("{}.txt", stem.to_string_lossy()))
}
