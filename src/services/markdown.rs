// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::domain::{Category, Commit};

/// Partition parsed commits by category, in fixed section order.
///
/// Input order is preserved within each bucket; empty buckets are dropped.
pub fn group_by_category(commits: &[Commit]) -> Vec<(Category, Vec<&Commit>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let group: Vec<&Commit> = commits
                .iter()
                .filter(|commit| commit.category == category)
                .collect();
            (category, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// Renders grouped commits as a markdown changelog.
pub struct MarkdownRenderer {
    heading_level: u8,
    show_body: bool,
    show_solved_issues: bool,
    include_unknown: bool,
}

impl MarkdownRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            heading_level: config.format.heading_level,
            show_body: config.format.show_body,
            show_solved_issues: config.format.show_solved_issues,
            include_unknown: config.include_unknown,
        }
    }

    /// Render the full changelog document. Returns an empty string when
    /// there is nothing to render.
    pub fn render(&self, commits: &[Commit]) -> String {
        let marker = "#".repeat(usize::from(self.heading_level));
        let mut sections = Vec::new();

        for (category, group) in group_by_category(commits) {
            if category == Category::Unknown && !self.include_unknown {
                continue;
            }

            let mut section = format!("{marker} {}\n\n", category.heading());
            for commit in group {
                section.push_str(&self.render_commit(commit));
            }
            sections.push(section);
        }

        // Breaking changes are aggregated across every category, in input
        // order, into one trailing section.
        let breaking: Vec<&str> = commits
            .iter()
            .flat_map(|commit| commit.breaking_changes.iter().map(String::as_str))
            .collect();
        if !breaking.is_empty() {
            let mut section = format!("{marker} BREAKING CHANGES\n\n");
            for entry in breaking {
                section.push_str("- ");
                section.push_str(entry);
                section.push('\n');
            }
            sections.push(section);
        }

        sections.join("\n")
    }

    fn render_commit(&self, commit: &Commit) -> String {
        let mut item = format!("- {}", commit.subject);

        if self.show_solved_issues
            && commit.solved_issues.iter().any(|issue| !issue.is_empty())
        {
            item.push_str(" (solves ");
            item.push_str(&commit.solved_issues.join(", "));
            item.push(')');
        }
        item.push('\n');

        if self.show_body && !commit.body.is_empty() {
            for line in commit.body.lines() {
                item.push_str("  ");
                item.push_str(line);
                item.push('\n');
            }
        }

        item
    }
}
