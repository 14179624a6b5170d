//! Headline ticker worker.
//!
//! Reads the live snapshot through a [`RuntimeHandle`] on each round, so the
//! summary always reflects the current ranch rather than the one at startup.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use crate::api::RuntimeHandle;
use crate::events::{Event, EventBus, HeadlineEvent};
use crate::headline::{HeadlineError, HeadlineProvider};

pub struct HeadlineWorker {
    handle: RuntimeHandle,
    provider: Arc<dyn HeadlineProvider>,
    event_bus: EventBus,
    latest: watch::Sender<String>,
    initial_delay: Duration,
    interval: Duration,
    timeout: Duration,
}

impl HeadlineWorker {
    pub fn new(
        handle: RuntimeHandle,
        provider: Arc<dyn HeadlineProvider>,
        event_bus: EventBus,
        latest: watch::Sender<String>,
        initial_delay: Duration,
        interval: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            handle,
            provider,
            event_bus,
            latest,
            initial_delay,
            interval,
            timeout,
        }
    }

    pub async fn run(self) {
        let start = time::Instant::now() + self.initial_delay;
        let mut ticker = time::interval_at(start, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let summary = match self.handle.snapshot().await {
                Ok(snapshot) => snapshot.summary(),
                Err(error) => {
                    debug!(%error, "Simulation gone, stopping headline worker");
                    break;
                }
            };

            let headline = self.fetch(&summary).await;
            self.latest.send_replace(headline.clone());
            self.event_bus
                .publish(Event::Headline(HeadlineEvent::HeadlineUpdated { headline }));
        }
    }

    async fn fetch(&self, summary: &str) -> String {
        let result = match time::timeout(self.timeout, self.provider.headline(summary)).await {
            Ok(result) => result,
            Err(_) => Err(HeadlineError::Timeout(self.timeout)),
        };

        match result {
            Ok(headline) => headline,
            Err(error) => {
                warn!(%error, "Failed to generate headline");
                error.fallback_headline().to_string()
            }
        }
    }
}
