use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for fetching content and rendering the portfolio page
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Fetch portfolio projects from the content store and render the site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects from the content store
    Projects {
        /// Print the raw items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the portfolio page as HTML
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show resolved configuration and feature flags
    Config,
}
