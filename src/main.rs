use anyhow::{Context, Result};
use clap::Parser;
use inmostore::commands::{Config, Endpoint, execute};
use std::io::Write;
use std::process::ExitCode;

/// inmostore - Portal Services website API client
///
/// Calls one endpoint and prints the raw JSON answer. When the call fails the
/// standard error document is printed and the exit status is non-zero.
///
/// Examples:
///   inmostore --api-key KEY get-inmueble 6f1c...     # Property detail
///   inmostore --api-key KEY embed-url 9a2b...        # Image URL, no request
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Endpoint,

    /// Account (company) identifier (also via INMOSTORE_API_ID)
    #[arg(
        long = "account-id",
        env = "INMOSTORE_API_ID",
        value_name = "ID",
        global = true
    )]
    pub account_id: Option<String>,

    /// API key appended to every request (also via INMOSTORE_API_KEY)
    #[arg(
        long = "api-key",
        env = "INMOSTORE_API_KEY",
        value_name = "KEY",
        global = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// API root URL (defaults to https://inmostore-api.psweb.me/)
    #[arg(
        long = "api-url",
        env = "INMOSTORE_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = Config::new(cli.account_id, cli.api_key, cli.api_url);
    let client = config.build_client()?;
    let output = execute(&client, &cli.command).await;

    writeln!(std::io::stdout(), "{}", output.text).context("Failed to write output")?;

    Ok(if output.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
