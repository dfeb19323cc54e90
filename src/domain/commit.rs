// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use crate::domain::Diagnostic;

/// The closed classification of a commit's intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Feature,
    Fix,
    Refactoring,
    Clean,
    Chore,
    Build,
    Test,
    Unknown,
}

impl Category {
    /// Rendering order. `Unknown` comes last and is only rendered on request.
    pub const ALL: [Category; 8] = [
        Self::Feature,
        Self::Fix,
        Self::Refactoring,
        Self::Clean,
        Self::Chore,
        Self::Build,
        Self::Test,
        Self::Unknown,
    ];

    /// Map a lower-cased type token to a category.
    ///
    /// Returns `None` for anything outside the table; the caller decides
    /// whether that means `Unknown` plus a diagnostic.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "fix" => Some(Self::Fix),
            "feat" | "feature" => Some(Self::Feature),
            "refac" | "refactoring" | "refactor" => Some(Self::Refactoring),
            "clean" => Some(Self::Clean),
            "chore" => Some(Self::Chore),
            "build" => Some(Self::Build),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feat",
            Self::Fix => "fix",
            Self::Refactoring => "refactor",
            Self::Clean => "clean",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Test => "test",
            Self::Unknown => "unknown",
        }
    }

    /// Markdown section heading for this category.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Feature => "Features",
            Self::Fix => "Bug Fixes",
            Self::Refactoring => "Refactoring",
            Self::Clean => "Cleanups",
            Self::Chore => "Chores",
            Self::Build => "Build",
            Self::Test => "Tests",
            Self::Unknown => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Raw commit metadata as read from version control, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCommit {
    pub hash: String,
    pub author: String,
    /// Subject line, trimmed of its trailing newline.
    pub subject: String,
    /// Body text; may be empty or hold blank-line-separated paragraphs.
    pub body: String,
}

/// One version-control commit after parsing.
///
/// Raw fields are kept untouched next to their parsed counterparts so that
/// callers can always fall back to the original text. Malformed input never
/// fails the record; every anomaly lands in `errors` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub raw_subject: String,
    pub raw_body: String,

    /// Subject with the category prefix and scope list removed, trimmed.
    pub subject: String,
    /// The single free-text paragraph of the body, empty if none.
    pub body: String,
    pub category: Category,
    /// Scope names from the parenthesized list after the type token.
    pub contexts: Vec<String>,
    /// Issue identifiers from a `solves:` paragraph.
    pub solved_issues: Vec<String>,
    /// Entries from a `breaking changes:` paragraph.
    pub breaking_changes: Vec<String>,
    /// Advisory parse diagnostics, in the order they were detected.
    pub errors: Vec<Diagnostic>,
}

impl Commit {
    /// Short hash for log and diagnostic output.
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.len(), |(i, _)| i);
        &self.hash[..end]
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.errors.is_empty()
    }
}
