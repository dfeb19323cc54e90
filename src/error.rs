// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Fatal pipeline errors. Advisory per-commit parse diagnostics live in
/// `domain::Diagnostic` and never surface here.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Not a git repository")]
    #[diagnostic(
        code(chlog::git::not_repo),
        help("Point --dir at a git repository or run inside one")
    )]
    NotAGitRepo,

    #[error("Git error: {0}")]
    #[diagnostic(code(chlog::git::error))]
    Git(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(chlog::config::error))]
    Config(String),

    #[error("{count} commit(s) carried parse diagnostics")]
    #[diagnostic(
        code(chlog::strict::diagnostics),
        help("Run with --show-errors to inspect them, or drop --strict")
    )]
    Strict { count: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
