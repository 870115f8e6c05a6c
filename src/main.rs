mod api;
mod config;
mod filter;
mod models;
mod notify;
mod report;
mod watcher;

use std::env;
use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::api::client::ApiClient;
use crate::config::WatchConfig;
use crate::notify::{BeepNotifier, Notify, NoopNotifier};
use crate::watcher::Watcher;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = WatchConfig::from_env()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("failed to open log file {}", config.log_path))?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(log_file))
        .init();

    info!(
        "Search Query\nPincodes: {:?}\nDate: {}\nMin Age: {}\nVaccine: {}\nQuery Interval: {} Mins\nFree Only: {}\n",
        config.pincodes,
        config.date,
        config.min_age_limit,
        config.vaccine,
        config.poll_interval_mins,
        config.free_only,
    );

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received ctrl-c, stopping after the current sweep");
            signal_cancel.cancel();
        }
    });

    // SILENT disables the tone for machines without audio output
    let notifier: Box<dyn Notify + Send + Sync> = if env::var("SILENT").is_ok() {
        Box::new(NoopNotifier)
    } else {
        Box::new(BeepNotifier)
    };

    let watcher = Watcher::new(config, ApiClient::new(), notifier);
    watcher.run(cancel).await
}
