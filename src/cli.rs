//! Command line interface for the `packframe` binary.
//!
//! Kept free of crate-internal imports so the build script can include it
//! to render the manual page.

use clap::{Parser, Subcommand};

/// Command line arguments for the `packframe` binary.
#[derive(Debug, Parser)]
#[command(
    name = "packframe",
    version,
    about = "Pack and inspect length-prefixed frames"
)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands understood by `packframe`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Frame TEXT as an opaque payload and print the frame in hex.
    Pack {
        /// Text carried as the frame body.
        text: String,
        /// Pack into a zeroed fixed-size buffer of this many bytes.
        #[arg(short, long)]
        capacity: Option<usize>,
        /// Let the frame fill the fixed buffer completely.
        #[arg(long, requires = "capacity")]
        exact: bool,
    },
    /// Decode a hex-encoded frame and describe its header and body.
    Inspect {
        /// Hex digits of the frame; whitespace between groups is ignored.
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },
}
