//! vopher - acquire vim-plugins the gopher-way.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use vopher_archive::FormatRegistry;
use vopher_core::{CleanOutcome, Config, Pipeline, Plugin, new_ui};
use vopher_fetch::ReqwestClient;

use crate::cli::{Action, App};

mod cli;
mod logging;
mod sample;

const EXIT_CONFIG: u8 = 1;
const EXIT_FAILED: u8 = 2;

fn main() -> ExitCode {
    let app = match App::try_parse() {
        Ok(app) => app,
        Err(e) => return usage_exit(&e),
    };

    if let Err(e) = logging::setup_logging(app.verbose) {
        eprintln!("vopher: {e:#}");
        return ExitCode::from(EXIT_CONFIG);
    }

    match run(&app) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vopher: {e:#}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

/// Print a clap error or help text; `--help` and `--version` are not failures.
fn usage_exit(e: &clap::Error) -> ExitCode {
    if let Err(io) = e.print() {
        eprintln!("vopher: failed to print usage: {io}");
    }
    if e.use_stderr() {
        ExitCode::from(EXIT_CONFIG)
    } else {
        ExitCode::SUCCESS
    }
}

fn run(app: &App) -> anyhow::Result<ExitCode> {
    let action = app.action();
    if action == Action::Sample {
        print!("{}", sample::SAMPLE);
        return Ok(ExitCode::SUCCESS);
    }

    let config = app.config();
    let registry = FormatRegistry::standard();
    let plugins = vopher_core::read_list(&app.file, &registry)?;
    tracing::debug!(file = %app.file.display(), plugins = plugins.len(), "read plugin list");

    match action {
        Action::Update => update(&config, registry, &plugins),
        Action::Clean => clean(&config, &plugins),
        Action::Sample => Ok(ExitCode::SUCCESS),
    }
}

fn update(config: &Config, registry: FormatRegistry, plugins: &[Plugin]) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let _guard = runtime.enter();

    let client = ReqwestClient::new().context("failed to set up the http client")?;
    let pipeline = Pipeline::new(client, registry).force(config.force);
    let ui = new_ui(config.ui);

    let report = runtime.block_on(pipeline.update(plugins, &config.dir, ui));
    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("vopher: {} of {} plugins failed", report.failed, report.failed + report.succeeded);
        Ok(ExitCode::from(EXIT_FAILED))
    }
}

fn clean(config: &Config, plugins: &[Plugin]) -> anyhow::Result<ExitCode> {
    let entries = vopher_core::clean(plugins, &config.dir, config.force)?;

    let mut failed = false;
    for entry in &entries {
        let folder = entry.folder.display();
        match &entry.outcome {
            CleanOutcome::Removed => println!("'clean' {folder} ok"),
            CleanOutcome::Missing => println!("'clean' info: {folder} does not exist"),
            CleanOutcome::Failed(e) => {
                failed = true;
                println!("'clean' error: {folder} {e}");
            }
        }
    }

    Ok(if failed {
        ExitCode::from(EXIT_FAILED)
    } else {
        ExitCode::SUCCESS
    })
}
