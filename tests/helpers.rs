// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use chlog::domain::{Category, Commit};

/// Create a minimal parsed Commit for testing
#[allow(dead_code)]
pub fn make_commit(category: Category, subject: &str) -> Commit {
    Commit {
        hash: "abc1234def5678".into(),
        author: "A U Thor <au@example.com>".into(),
        raw_subject: format!("{}: {}", category.as_str(), subject),
        subject: subject.to_string(),
        category,
        ..Default::default()
    }
}

/// Same, with a free-text body paragraph
#[allow(dead_code)]
pub fn make_commit_with_body(category: Category, subject: &str, body: &str) -> Commit {
    Commit {
        body: body.to_string(),
        ..make_commit(category, subject)
    }
}
