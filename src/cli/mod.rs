// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the setsift command-line interface.
//!
//! Four subcommands: `analyze` compares list files, `serve-json` answers one
//! JSON request on stdin the way a web handler would, `score` explains how two
//! strings compare, and `parse` shows what a pasted list turns into.

pub mod display;
pub mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use setsift::DEFAULT_THRESHOLD;

#[derive(Parser)]
#[command(
    name = "setsift",
    about = "Compare pasted lists: overlaps, coverage, and cross-script near-duplicates",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze list files, one group per file
    Analyze {
        /// Files containing one item per line (spreadsheet paste format)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Group names, in file order (defaults to each file's stem)
        #[arg(short, long)]
        name: Vec<String>,

        /// Minimum similarity (0-100) for two items to share a cluster
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u8,

        /// Minimum similarity (0-100) for a coverage suggestion
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        suggestion_threshold: u8,

        /// Print the result as JSON instead of a terminal report
        #[arg(long)]
        json: bool,
    },

    /// Read one JSON request body on stdin and write the JSON response
    ///
    /// The body uses the form fields `num_groups`, `group_{i}_name` and
    /// `group_{i}_data`. Errors are written as `{"error": "..."}` with a
    /// non-zero exit status.
    ServeJson {
        /// Minimum similarity (0-100) for two items to share a cluster
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u8,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },

    /// Show how two strings score against each other
    Score {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Threshold below which romanization bridging is attempted
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u8,
    },

    /// Parse a pasted list and print one item per line
    Parse {
        /// File to parse (stdin if omitted)
        file: Option<PathBuf>,
    },
}
