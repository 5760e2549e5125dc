//! `recordbook` binary entry point.
//!
//! # Responsibility
//! - Load `.env`, parse flags, and start logging before any subcommand.
//! - Own the connection pool for the lifetime of the chosen subcommand.
//!
//! # Invariants
//! - A pool that cannot be opened is fatal: logged, reported, non-zero exit.

mod args;
mod console;
mod contacts;
mod guess;
mod showcase;

use anyhow::Context;
use args::{Cli, Command};
use clap::Parser;
use console::Console;
use contacts::ContactMenu;
use log::{error, info};
use recordbook_api::HttpServer;
use recordbook_core::{
    default_log_dir, default_log_level, init_logging, open_pool, ContactService, DbPool,
    SqliteContactRepository,
};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    start_logging(cli.log_level.as_deref(), cli.log_dir.clone());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        db_path, command, ..
    } = cli;

    match command {
        Command::Serve(serve_args) => {
            let pool = connect(&db_path)?;
            let server = HttpServer::new(serve_args.into_config(), pool);
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")?;
            runtime
                .block_on(server.start())
                .context("HTTP server failed")?;
        }
        Command::Contacts => {
            let service = ContactService::new(SqliteContactRepository::new(connect(&db_path)?));
            let console = Console::new(io::stdin().lock(), io::stdout());
            ContactMenu::new(&service, console)
                .run()
                .context("console I/O failed")?;
        }
        Command::Guess => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            guess::play(&mut rand::thread_rng(), &mut console).context("console I/O failed")?;
        }
        Command::Showcase => {
            showcase::run(&mut io::stdout().lock()).context("failed to write showcase")?;
        }
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn connect(db_path: &Path) -> anyhow::Result<DbPool> {
    open_pool(db_path).with_context(|| format!("cannot open database `{}`", db_path.display()))
}

/// Logging failures are reported but never block the command itself.
fn start_logging(level: Option<&str>, log_dir: Option<PathBuf>) {
    let level = level.unwrap_or_else(|| default_log_level());
    let dir = log_dir.unwrap_or_else(default_log_dir);
    let dir = if dir.is_absolute() {
        dir
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(dir),
            Err(err) => {
                eprintln!("warning: logging disabled: {err}");
                return;
            }
        }
    };

    match init_logging(level, &dir.to_string_lossy()) {
        Ok(()) => info!(
            "event=cli_start module=cli status=ok version={}",
            env!("CARGO_PKG_VERSION")
        ),
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }
}
