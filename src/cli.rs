use clap::{Parser, Subcommand};

use crate::commands::{confirm, dates, locale, parse, quick};

#[derive(Debug, Parser)]
#[command(name = "docfilter")]
#[command(about = "Document list filter widgets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick a date range interactively
    Dates(dates::Args),

    /// Show the delete confirmation dialog
    Confirm(confirm::Args),

    /// Apply a quick date filter
    Quick(quick::Args),

    /// Normalize typed date text
    Parse(parse::Args),

    /// Show the date placeholder and mask for a locale
    Locale(locale::Args),
}
