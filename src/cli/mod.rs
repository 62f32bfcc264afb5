use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod ui;

#[derive(Parser)]
#[command(
    name = "storybook",
    about = "Turns a short prompt into an illustrated children's storybook document",
    version,
    author,
    long_about = None
)]
pub struct StorybookCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a storybook document from a prompt
    Generate {
        /// The story prompt (up to 500 characters)
        #[arg(short, long)]
        prompt: String,

        /// Output file for the document (defaults to the story title)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of generation attempts before giving up
        #[arg(short, long, default_value = "1")]
        retries: u32,
    },

    /// Check that an API key for the text-generation service is reachable
    Check,
}
