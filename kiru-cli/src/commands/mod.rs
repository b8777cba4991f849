//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_catalog;
pub mod list;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into sentences
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate an abbreviation catalog file
    Validate(validate::ValidateArgs),

    /// Generate an abbreviation catalog template
    GenerateCatalog(generate_catalog::GenerateCatalogArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                let mut stdout = std::io::stdout().lock();
                match subcommand {
                    ListCommands::Languages => list::write_languages(&mut stdout),
                    ListCommands::Formats => list::write_formats(&mut stdout),
                }
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateCatalog(args) => args.execute(),
        }
    }
}
