// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Markdown output options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFormat {
    /// Markdown heading level for sections (default: 3, i.e. `###`)
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,

    /// Render the body paragraph under each commit (default: true)
    #[serde(default = "default_true")]
    pub show_body: bool,

    /// Append solved issue references to each commit (default: false)
    #[serde(default)]
    pub show_solved_issues: bool,
}

impl Default for RenderFormat {
    fn default() -> Self {
        Self {
            heading_level: default_heading_level(),
            show_body: true,
            show_solved_issues: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_heading_level() -> u8 {
    3
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Render a section for commits with an unrecognized category
    #[serde(default)]
    pub include_unknown: bool,

    /// Print accumulated parse diagnostics to stderr
    #[serde(default)]
    pub show_diagnostics: bool,

    /// Markdown output options
    #[serde(default)]
    pub format: RenderFormat,
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.chlog.toml next to the repository)
        let project_config = cli.dir.join(".chlog.toml");
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (CHLOG_INCLUDE_UNKNOWN, etc.)
        // Use __ separator for nested keys (e.g. CHLOG_FORMAT__SHOW_BODY)
        figment = figment.merge(Env::prefixed("CHLOG_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "chlog").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if cli.show_errors {
            self.show_diagnostics = true;
        }
    }

    fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.format.heading_level) {
            return Err(Error::Config(format!(
                "format.heading_level must be 1–6, got {}",
                self.format.heading_level
            )));
        }

        Ok(())
    }

    /// Create default config file
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# chlog Configuration

# Render a section for commits with an unrecognized category
include_unknown = false

# Print accumulated parse diagnostics to stderr
show_diagnostics = false

# Markdown output options
[format]
# Heading level for sections (3 renders `### Features`)
heading_level = 3

# Render the body paragraph under each commit
show_body = true

# Append solved issue references to each commit
show_solved_issues = false
"#;

        fs::write(&path, content)?;

        Ok(path)
    }
}
