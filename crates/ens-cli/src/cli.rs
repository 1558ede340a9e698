use super::commands;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Inspect and convert Tripos MOL2 ligand files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,

    /// Index of the molecule to use in multi-molecule files
    #[arg(long, global = true, default_value_t = 0)]
    molecule: usize,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a field of the MOLECULE record
    Info {
        #[arg(short, long)]
        input: PathBuf,
        /// name, general, type, charge, status_bits or comment; all when omitted
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Print one atom column for every atom of an element
    Atoms {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        element: String,
        /// atom_name, coords, atom_type, subset_id, subset_name or charge
        #[arg(short, long, default_value = "atom_name")]
        field: String,
    },
    /// Print a bond table keyed by origin atom id
    Bonds {
        #[arg(short, long)]
        input: PathBuf,
        /// atoms_bond or bonds_type
        #[arg(short, long, default_value = "atoms_bond")]
        kind: String,
    },
    /// Summarize every molecule in a file
    Summary {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Write the selected molecule as MOL2, or its atom table as CSV
    Convert {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        let format = self.format;
        let index = self.molecule;
        match self.command {
            Commands::Info { input, kind } => {
                commands::info::execute(&input, index, kind.as_deref(), format)
            }
            Commands::Atoms {
                input,
                element,
                field,
            } => commands::atoms::execute(&input, index, &element, &field, format),
            Commands::Bonds { input, kind } => {
                commands::bonds::execute(&input, index, &kind, format)
            }
            Commands::Summary { input } => commands::summary::execute(&input, format),
            Commands::Convert { input, output } => {
                commands::convert::execute(&input, index, &output)
            }
        }
    }
}
