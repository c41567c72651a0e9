//! Command line interface for the escola-api binary.

use clap::{Parser, Subcommand};

use crate::config::ConfigLoader;
use crate::db::run_migrations;
use crate::logger::init_logger;
use crate::server::Server;

/// Language-school management backend
#[derive(Debug, Parser)]
#[command(name = "escola-api", version = crate::pkg_version(), about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Run pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Loads configuration and executes the selected command.
    pub async fn execute(self) -> anyhow::Result<()> {
        let settings = ConfigLoader::new()?.load()?;
        init_logger(&settings.logger)?;

        match self.command {
            Command::Serve => Server::new(settings).run().await,
            Command::Migrate => {
                run_migrations(&settings.database.url).await?;
                tracing::info!("Migrations complete");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["escola-api", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::try_parse_from(["escola-api", "migrate"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate));
    }
}
