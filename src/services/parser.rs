// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Category, Commit, Diagnostic, RawCommit};

/// Paragraph boundary: two or more consecutive newlines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("invalid regex"));

/// Breaking-change header, matched against the lower-cased paragraph. The
/// colon must be followed immediately by a newline; trailing whitespace
/// after the colon does not count as a header.
static BREAKING_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"breaking[-_ ]changes:\n").expect("invalid regex"));

/// Bullet boundary inside a breaking-change paragraph: a newline followed by
/// indentation and a `-`.
static BULLET_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s+-").expect("invalid regex"));

const MAX_SUBJECT_CHARS: usize = 100;
const MAX_BODY_PARAGRAPHS: usize = 3;

/// Parsed fields extracted from a raw subject line.
#[derive(Debug, Default)]
struct SubjectParts {
    category: Category,
    contexts: Vec<String>,
    subject: String,
    diagnostics: Vec<Diagnostic>,
}

/// Parsed fields extracted from a raw body.
#[derive(Debug, Default)]
struct BodyParts {
    body: String,
    solved_issues: Vec<String>,
    breaking_changes: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

/// Commit message parser: classifies a raw subject line and raw body into
/// typed fields, accumulating advisory diagnostics instead of failing.
///
/// Parsing is a pure function of the input strings: no state is retained
/// across calls, and the same input always yields the same record.
pub struct MessageParser;

impl MessageParser {
    /// Parse one raw commit into a fully populated record.
    pub fn parse(raw: RawCommit) -> Commit {
        let subject = Self::parse_subject(&raw.subject);
        let body = Self::parse_body(&raw.body);

        let mut errors = subject.diagnostics;
        errors.extend(body.diagnostics);

        Commit {
            hash: raw.hash,
            author: raw.author,
            raw_subject: raw.subject,
            raw_body: raw.body,
            subject: subject.subject,
            category: subject.category,
            contexts: subject.contexts,
            body: body.body,
            solved_issues: body.solved_issues,
            breaking_changes: body.breaking_changes,
            errors,
        }
    }

    /// Extract category, scope list, and cleaned subject text from a raw
    /// subject line.
    fn parse_subject(raw: &str) -> SubjectParts {
        let mut parts = SubjectParts::default();

        if raw.contains('\n') {
            parts.diagnostics.push(Diagnostic::MultilineSubject);
        }
        if raw.chars().count() > MAX_SUBJECT_CHARS {
            parts.diagnostics.push(Diagnostic::OversizedSubject);
        }

        // Split on the first `:`; any further colons belong to the subject.
        let Some((head, rest)) = raw.split_once(':') else {
            parts.category = Category::Unknown;
            parts.subject = raw.trim().to_string();
            parts.diagnostics.push(Diagnostic::MalformedSubject);
            return parts;
        };

        let mut token = head;
        if let Some((name, scopes)) = head.split_once('(') {
            token = name;
            if !scopes.contains(')') {
                parts.diagnostics.push(Diagnostic::UnterminatedContexts);
            }
            parts.contexts = scopes
                .trim_end_matches(')')
                .split(',')
                .map(|scope| scope.trim().to_string())
                .collect();
        }

        let token = token.trim();
        match Category::parse(&token.to_lowercase()) {
            Some(category) => parts.category = category,
            None => {
                parts.category = Category::Unknown;
                parts
                    .diagnostics
                    .push(Diagnostic::UnknownType(token.to_string()));
            }
        }

        parts.subject = rest.trim().to_string();
        parts
    }

    /// Split the raw body into paragraphs and classify each one as a
    /// breaking-change block, a solves block, or free-text description.
    fn parse_body(raw: &str) -> BodyParts {
        let mut parts = BodyParts::default();
        if raw.is_empty() {
            return parts;
        }

        let paragraphs: Vec<&str> = PARAGRAPH_BREAK
            .split(raw)
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect();

        if paragraphs.len() > MAX_BODY_PARAGRAPHS {
            parts.diagnostics.push(Diagnostic::OversizedBody);
        }

        // Classification is priority-ordered; repeated paragraphs of the
        // same kind overwrite earlier ones (last wins).
        for paragraph in paragraphs {
            let lowered = paragraph.to_lowercase();
            if BREAKING_HEADER.is_match(&lowered) {
                Self::parse_breaking_changes(paragraph, &mut parts);
            } else if lowered.starts_with("solves:") {
                Self::parse_solves(paragraph, &mut parts);
            } else {
                parts.body = paragraph.to_string();
            }
        }

        parts
    }

    /// Split a breaking-change paragraph into its bullet entries. The text
    /// before the first bullet is the header and is discarded.
    fn parse_breaking_changes(paragraph: &str, parts: &mut BodyParts) {
        let segments: Vec<&str> = BULLET_BOUNDARY.split(paragraph).collect();
        if segments.len() <= 1 {
            parts
                .diagnostics
                .push(Diagnostic::UnparsableBreakingChanges);
            parts.breaking_changes = Vec::new();
            return;
        }

        parts.breaking_changes = segments[1..]
            .iter()
            .map(|segment| segment.trim().to_string())
            .collect();
    }

    /// Split a `solves:` paragraph into its issue identifiers. The entries
    /// are assigned even when the declaration is empty, so a bare `solves:`
    /// yields a single empty identifier plus a diagnostic.
    fn parse_solves(paragraph: &str, parts: &mut BodyParts) {
        let declared = paragraph.split_once(':').map_or("", |(_, rest)| rest);

        if declared.trim().is_empty() {
            parts.diagnostics.push(Diagnostic::EmptySolves);
        }

        parts.solved_issues = declared
            .split(',')
            .map(|issue| issue.trim().to_string())
            .collect();
    }
}
