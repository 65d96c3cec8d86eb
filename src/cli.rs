use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .lexemes file; its directory is searched first
    pub input: PathBuf,

    /// Definition file name to look for (default: `<input stem>.txt`)
    #[arg(long)]
    pub definitions: Option<String>,

    /// Print the loaded table as pretty JSON instead of a text summary
    #[arg(long)]
    pub dump: bool,
}
