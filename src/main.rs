// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod domain;
mod error;
mod services;

use app::App;
use cli::Cli;

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("chlog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chlog=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var("NO_COLOR").is_err())
        .without_time()
        .init();

    let app = match App::new(cli) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run() {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
