// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Advisory parse diagnostic attached to a single commit record.
///
/// These are never propagated as `Err`: the parser accumulates them on the
/// record and keeps going with best-effort defaults. Callers decide whether
/// to surface, log, or ignore them.
#[derive(Error, MietteDiagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("subject must not contain newlines")]
    #[diagnostic(code(chlog::parse::multiline_subject))]
    MultilineSubject,

    #[error("subject exceeds 100 characters")]
    #[diagnostic(code(chlog::parse::oversized_subject))]
    OversizedSubject,

    #[error("subject does not follow the format TYPE[(context)]: SUBJECT")]
    #[diagnostic(
        code(chlog::parse::malformed_subject),
        help("expected e.g. `feat(api): add endpoint`")
    )]
    MalformedSubject,

    #[error("missing ) in context list")]
    #[diagnostic(code(chlog::parse::unterminated_contexts))]
    UnterminatedContexts,

    #[error("{0} is an unknown commit type.")]
    #[diagnostic(
        code(chlog::parse::unknown_type),
        help("known types: fix, feat, refactor, clean, chore, build, test")
    )]
    UnknownType(String),

    #[error("body has too many parts; expected a maximum of 3")]
    #[diagnostic(code(chlog::parse::oversized_body))]
    OversizedBody,

    #[error("unable to parse breaking changes")]
    #[diagnostic(
        code(chlog::parse::breaking_changes),
        help("list each change as an indented `-` bullet under the header")
    )]
    UnparsableBreakingChanges,

    #[error("no resolved issues detected even though they were declared")]
    #[diagnostic(code(chlog::parse::empty_solves))]
    EmptySolves,
}
