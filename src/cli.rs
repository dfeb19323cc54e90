// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "chlog")]
#[command(version)]
#[command(about = "Changelog generator for conventional commit histories", long_about = None)]
pub struct Cli {
    /// Start point of the commit range
    #[arg(long, default_value = "HEAD", env = "CHLOG_FROM")]
    pub from: String,

    /// End point of the commit range (renders TO..FROM when set)
    #[arg(long, env = "CHLOG_TO")]
    pub to: Option<String>,

    /// Directory of the git repository
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Print parse diagnostics to stderr
    #[arg(long)]
    pub show_errors: bool,

    /// Fail when any commit carried parse diagnostics
    #[arg(long)]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
