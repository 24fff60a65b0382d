use tracing::debug;

use super::Cli;
use crate::{
    api::{LookupRequest, RedirectClient},
    config::Config,
    error::CheckRedirectsResult,
    report::Report,
};

pub struct LookupCommand {
    domain: String,
    user_agent: Option<String>,
    hops: bool,
}

impl LookupCommand {
    pub fn from_cli(cli: Cli) -> Option<Self> {
        Some(Self {
            domain: cli.domain?,
            user_agent: cli.user_agent,
            hops: cli.hops,
        })
    }
}

/// A remote-reported error is a completed lookup and returns `Ok`.
pub async fn run(config: Config, command: LookupCommand) -> CheckRedirectsResult<()> {
    let request = LookupRequest::with_default_user_agent(
        command.domain,
        command.user_agent,
        &config.lookup.default_user_agent,
    )?;
    println!(
        "Running 'check-redirects.com' API engine for {:?}\n",
        request.domain
    );

    let client = RedirectClient::new(&config.api)?;
    debug!(url = client.url(), "Sending lookup");
    let result = client.lookup(&request).await?;

    println!("{}", Report::new(&result).with_hops(command.hops));
    Ok(())
}
