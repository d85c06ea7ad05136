//! Command-line interface for the converter.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing::warn;

use crate::error::Result;
use crate::gedcom::{render, save_gedcom};
use crate::graph::load_graphml;

/// Convert a yEd GraphML family tree to GEDCOM.
#[derive(Parser)]
#[command(name = "graphml2gedcom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the .graphml input file.
    pub input: PathBuf,

    /// Path where the .ged output should be written (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert(&cli)
}

/// Execute the conversion.
fn convert(cli: &Cli) -> Result<()> {
    let tree = load_graphml(&cli.input)?;

    if !tree.persons.is_empty() {
        // The source format carries no sex data; see the crate docs.
        warn!("Sex is unknown for every person; edit the output to assign SEX/WIFE manually");
    }

    let gedcom = render(&tree);

    let Some(output) = &cli.output else {
        println!("{gedcom}");
        return Ok(());
    };

    save_gedcom(&gedcom, output)?;

    println!(
        "  Persons: {}  Families: {}  Relations: {}",
        style(tree.persons.len()).green(),
        style(tree.families.len()).green(),
        style(tree.relations.len()).green()
    );
    println!(
        "{} {}",
        style("Written to:").green().bold(),
        output.display()
    );

    Ok(())
}
