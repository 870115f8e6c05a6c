use anyhow::{Context, Result};
use chrono::Local;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::api::client::ApiClient;
use crate::config::WatchConfig;
use crate::filter::{FilterCriteria, filter_sessions};
use crate::notify::Notify;
use crate::report::report_sessions;

/// Owns the poll loop: one sweep over every configured pincode, then wait
/// out the interval, forever. Cancellation is observed between sweeps; an
/// in-flight sweep always completes.
pub struct Watcher {
    config: WatchConfig,
    client: ApiClient,
    notifier: Box<dyn Notify + Send + Sync>,
}

impl Watcher {
    pub fn new(
        config: WatchConfig,
        client: ApiClient,
        notifier: Box<dyn Notify + Send + Sync>,
    ) -> Self {
        Watcher {
            config,
            client,
            notifier,
        }
    }

    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let criteria = self.config.filter_criteria();

        let mut ticker = interval(self.config.poll_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep(&criteria).await?;
                }
                _ = cancel.cancelled() => {
                    info!("watcher cancelled, shutting down");
                    return Ok(());
                }
            }
        }
    }

    /// Fetch → filter → report for every pincode, in configured order. Any
    /// failure aborts the whole sweep and propagates out of the run loop.
    async fn sweep(&self, criteria: &FilterCriteria) -> Result<()> {
        info!("Calling CoWin API");
        info!("Time: {}", Local::now());

        for pincode in &self.config.pincodes {
            let response = self
                .client
                .find_by_pin(pincode, &self.config.date)
                .await
                .with_context(|| format!("sweep failed at pincode {pincode}"))?;

            let matching = filter_sessions(response.sessions, criteria);
            report_sessions(&matching, self.notifier.as_ref());
        }

        Ok(())
    }
}
