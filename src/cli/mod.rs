pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// appicon - Launcher icon and manifest generator
#[derive(Parser, Debug)]
#[command(name = "appicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate all launcher icons and the iOS manifest
    Generate(generate::GenerateArgs),

    /// Print the builtin size catalogs
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
