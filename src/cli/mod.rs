// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pseudocalt command-line interface.
//!
//! Three subcommands: `generate` writes feature code, `inspect` summarizes what
//! a configuration would generate, and `verify` runs every invariant check
//! against it. With no subcommand the built-in catalogue is generated to
//! stdout, so `pseudocalt > calt.fea` just works.

pub mod display;
pub mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pseudocalt::ConfigOverrides;

#[derive(Parser)]
#[command(
    name = "pseudocalt",
    about = "Deterministic pseudorandom contextual-alternates feature generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inputs shared by every subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// JSON manifest with glyph classes (uses the built-in a-z/digits catalogue if omitted)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Seed for the partition generator
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of lookahead layers
    #[arg(long)]
    pub depth: Option<usize>,

    /// Number of random context partitions
    #[arg(long)]
    pub partitions: Option<usize>,

    /// Feature tag wrapping the generated block
    #[arg(long)]
    pub feature: Option<String>,
}

impl InputArgs {
    pub fn overrides(&self, no_header: bool) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            depth: self.depth,
            partitions: self.partitions,
            feature: self.feature.clone(),
            no_header,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate feature code
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the comment header above the feature block
        #[arg(long)]
        no_header: bool,
    },

    /// Summarize classes, partitions and lookups for a configuration
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Check every invariant of the generated feature
    Verify {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate {
            input: InputArgs::default(),
            output: None,
            no_header: false,
        }
    }
}
