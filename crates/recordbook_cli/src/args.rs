//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use recordbook_api::ServerConfig;
use std::path::PathBuf;

/// Recordbook - user REST service and console record tools.
#[derive(Parser, Debug)]
#[command(name = "recordbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "RECORDBOOK_DB_PATH", default_value = "recordbook.db")]
    pub db_path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "RECORDBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, global = true, env = "RECORDBOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the user REST API
    Serve(ServeArgs),
    /// Manage contacts through a numbered menu
    Contacts,
    /// Play the number guessing game
    Guess,
    /// Print the language demos
    Showcase,
}

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, env = "RECORDBOOK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "RECORDBOOK_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServeArgs {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "recordbook",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8081",
            "--db-path",
            "/tmp/rb.db",
        ])
        .unwrap();

        assert_eq!(cli.db_path.to_str(), Some("/tmp/rb.db"));
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.into_config().socket_addr(), "127.0.0.1:8081");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_are_accepted_before_subcommand() {
        let cli =
            Cli::try_parse_from(["recordbook", "--log-level", "warn", "showcase"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
        assert!(matches!(cli.command, Command::Showcase));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["recordbook", "dance"]).is_err());
    }
}
