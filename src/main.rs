use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

use lotto_check::session::{stdin_prompt, stdin_scanner};
use lotto_check::{ResultsFetcher, Session, TicketChecker, config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Let's check your lottery ticket.");

    let fetcher = ResultsFetcher::from_config(&config)?;
    tracing::info!(sources = ?fetcher.provider_names(), "result sources ready");

    let session = Session::new(TicketChecker::new(fetcher));
    let mut scanner = stdin_scanner();
    let mut prompt = stdin_prompt();

    session
        .serve(&mut scanner, &mut prompt, io::stdout())
        .await
        .inspect_err(|e| {
            tracing::error!("session error: {:?}", e);
        })?;

    Ok(())
}
