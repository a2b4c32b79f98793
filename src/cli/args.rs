//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, defaults::DefaultsArgs, enrich::EnrichArgs, holes::HolesArgs,
    list::ListArgs,
};

#[derive(Parser)]
#[command(name = "xenrich")]
#[command(author, version, about = "Crossover component enrichment")]
#[command(long_about = "Derives lead configuration, hole diameters, end insets, lead spacing and coil lead patterns for a catalog of crossover components.\n\nRun without a subcommand to enrich the configured catalog.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging)
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a component catalog and write the override table
    Enrich(EnrichArgs),

    /// Print the brand/series override table
    Defaults(DefaultsArgs),

    /// List enriched components
    List(ListArgs),

    /// Compute lead hole positions for enriched components
    Holes(HolesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated values (for piping)
    #[default]
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
