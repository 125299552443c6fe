//! Members CLI - manage who belongs to a domain
//!
//! This CLI lets domain administrators:
//! - List the members of a domain, owner first
//! - Add members or change their role (view, edit, admin)
//! - Remove members, or every member except the owner

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod commands;
mod config;
mod error;
mod output;

use client::{MembersClient, DEFAULT_TIMEOUT};
use commands::members::{self, MembersCommands};
use config::CliConfig;
use error::{CliError, CliResult};
use membership_runtime::MembershipService;
use membership_types::DomainId;
use std::time::Duration;

/// Endpoint used when neither flag, environment nor config provide one
const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Members CLI application
#[derive(Parser)]
#[command(name = "members")]
#[command(about = "Manage the members of a domain", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "MEMBERS_CONFIG")]
    config: Option<String>,

    /// Platform API endpoint
    #[arg(short, long, env = "MEMBERS_ENDPOINT")]
    endpoint: Option<String>,

    /// API token
    #[arg(short, long, env = "MEMBERS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Domain whose members are managed
    #[arg(short, long, env = "MEMBERS_DOMAIN")]
    domain: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: MembersCommands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;

    let domain = cli
        .domain
        .or(config.default_domain)
        .map(DomainId::new)
        .ok_or_else(|| {
            CliError::Config("No domain given: pass --domain or set default_domain".into())
        })?;
    let endpoint = cli
        .endpoint
        .or(config.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let token = cli.token.or(config.token);
    let timeout = config
        .timeout_seconds
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    // Create client
    let client = MembersClient::new(&endpoint, token, timeout)?;
    let service = MembershipService::new(client);

    members::execute(cli.command, &service, &domain, cli.output).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_remove_all_conflicts_with_member_list() {
        let result = Cli::try_parse_from(["members", "-d", "docs", "remove", "--all", "alice"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["members", "-d", "docs", "remove", "--all"]).unwrap();
        assert!(matches!(
            cli.command,
            MembersCommands::Remove { all: true, .. }
        ));
    }

    #[test]
    fn test_add_arguments() {
        let cli = Cli::try_parse_from([
            "members", "-d", "docs", "add", "alice", "bob", "--role", "admin", "--ids",
        ])
        .unwrap();

        match cli.command {
            MembersCommands::Add { members, role, ids } => {
                assert_eq!(members, vec!["alice", "bob"]);
                assert_eq!(role.as_deref(), Some("admin"));
                assert!(ids);
            }
            _ => panic!("expected add"),
        }
    }
}
