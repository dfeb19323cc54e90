// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::RawCommit;
use crate::error::{Error, Result};

/// Field separator between hash, author, subject, and body (ASCII unit
/// separator; git commit messages cannot contain it).
const FIELD_SEP: char = '\x1f';
/// Record separator between commits (ASCII record separator).
const RECORD_SEP: char = '\x1e';

/// `git log` pretty format producing one FIELD_SEP-delimited record per
/// commit, records delimited by RECORD_SEP.
const LOG_FORMAT: &str = "%H%x1f%an <%ae>%x1f%s%x1f%b%x1e";

/// Reads raw commit records from a git repository.
pub struct HistoryService {
    work_dir: PathBuf,
}

impl HistoryService {
    pub fn discover(dir: &Path) -> Result<Self> {
        let repo = gix::discover(dir).map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .work_dir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        Ok(Self { work_dir })
    }

    /// Read the raw commits of a range, newest first.
    ///
    /// With only `from`, the range is everything reachable from `from`;
    /// with both, it is `to..from`.
    pub fn read_range(&self, from: &str, to: Option<&str>) -> Result<Vec<RawCommit>> {
        let range = match to {
            Some(to) => format!("{to}..{from}"),
            None => from.to_string(),
        };

        let output = std::process::Command::new("git")
            .args(["log", &format!("--pretty=format:{LOG_FORMAT}"), &range])
            .current_dir(&self.work_dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim_end().to_string()));
        }

        let stream = String::from_utf8_lossy(&output.stdout);
        Ok(Self::parse_stream(&stream))
    }

    /// Split a pretty-format log stream into raw commit records.
    ///
    /// Records that do not carry exactly four fields are skipped with a
    /// warning rather than failing the whole range.
    pub fn parse_stream(stream: &str) -> Vec<RawCommit> {
        let mut commits = Vec::new();

        for record in stream.split(RECORD_SEP) {
            // git inserts a newline between per-commit format outputs.
            let record = record.strip_prefix('\n').unwrap_or(record);
            if record.is_empty() {
                continue;
            }

            let fields: Vec<&str> = record.splitn(4, FIELD_SEP).collect();
            let [hash, author, subject, body] = fields[..] else {
                warn!(fields = fields.len(), "skipping malformed log record");
                continue;
            };

            commits.push(RawCommit {
                hash: hash.to_string(),
                author: author.to_string(),
                subject: subject.trim_end_matches('\n').to_string(),
                body: body.to_string(),
            });
        }

        commits
    }
}
