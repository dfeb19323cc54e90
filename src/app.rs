// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use clap::CommandFactory;
use console::style;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::Commit;
use crate::error::{Error, Result};
use crate::services::{git::HistoryService, markdown::MarkdownRenderer, parser::MessageParser};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            include_unknown = config.include_unknown,
            heading_level = config.format.heading_level,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.generate()
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                self.print_info(&format!("Wrote {}", path.display()));
            }
            Commands::Config => {
                let rendered = toml::to_string_pretty(&self.config)
                    .map_err(|e| Error::Config(e.to_string()))?;
                print!("{rendered}");
            }
            Commands::Completions { shell } => {
                clap_complete::generate(*shell, &mut Cli::command(), "chlog", &mut std::io::stdout());
            }
        }
        Ok(())
    }

    fn generate(&self) -> Result<()> {
        let history = HistoryService::discover(&self.cli.dir)?;

        let raw = history.read_range(&self.cli.from, self.cli.to.as_deref())?;
        debug!(count = raw.len(), from = %self.cli.from, "commits read");

        if raw.is_empty() {
            self.print_info("No commits in range");
            return Ok(());
        }

        // Parsing is a pure function per commit, so the records can be
        // parsed in parallel; collect preserves input order.
        let commits: Vec<Commit> = raw.into_par_iter().map(MessageParser::parse).collect();

        let flagged = commits.iter().filter(|c| c.has_diagnostics()).count();
        if flagged > 0 {
            warn!(count = flagged, "commits carried parse diagnostics");

            if self.config.show_diagnostics {
                for commit in commits.iter().filter(|c| c.has_diagnostics()) {
                    for diagnostic in &commit.errors {
                        eprintln!(
                            "{} {}: {}",
                            style("warning:").yellow(),
                            commit.short_hash(),
                            diagnostic
                        );
                    }
                }
            }

            if self.cli.strict {
                return Err(Error::Strict { count: flagged });
            }
        }

        let renderer = MarkdownRenderer::new(&self.config);
        print!("{}", renderer.render(&commits));

        Ok(())
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}
