use clap::{builder::NonEmptyStringValueParser, Parser};
use lookup::LookupCommand;

use crate::{
    config::Config,
    error::{CheckRedirectsError, CheckRedirectsResult},
    util,
};

mod lookup;
mod version;

/// Check the redirect path of a domain and print its final destination.
///
/// Only the <scheme>://<host><path> of the final hop is printed, or the
/// error reported by the redirect-tracing service.
#[derive(Parser, Debug)]
#[command(name = "check-redirects", disable_version_flag = true)]
pub struct Cli {
    /// Domain whose redirect chain is traced
    #[arg(
        required_unless_present = "version",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub domain: Option<String>,
    /// User-Agent the service emulates while following redirects [default: chrome]
    pub user_agent: Option<String>,
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<String>,
    /// Override the redirect API endpoint
    #[arg(long)]
    pub api_url: Option<String>,
    /// Override the request timeout
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
    /// List every hop, not just the final destination
    #[arg(long)]
    pub hops: bool,
    /// Log request and response details to stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Display version information
    #[arg(short = 'V', long)]
    pub version: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.request_timeout_seconds = timeout;
        }
    }
}

pub async fn run_cli() -> CheckRedirectsResult<()> {
    let cli = Cli::parse();
    if cli.version {
        return version::run();
    }

    util::init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.clone())?;
    cli.apply_overrides(&mut config);

    match LookupCommand::from_cli(cli) {
        Some(command) => lookup::run(config, command).await,
        None => Err(CheckRedirectsError::InvalidArgument(
            "a domain is required".to_string(),
        )),
    }
}
