//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! player actions, snapshots, and topic subscriptions.
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use super::errors::{Result, RuntimeError};
use super::hold::ProduceHold;
use super::snapshot::{ActionStatus, Snapshot};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    headline: watch::Receiver<String>,
    hold_interval: Duration,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        headline: watch::Receiver<String>,
        hold_interval: Duration,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            headline,
            hold_interval,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Produce once, as a single press of the production button.
    pub async fn produce(&self) -> Result<ActionStatus> {
        self.request(|reply| Command::Produce { reply }).await
    }

    /// Buy the next level of an upgrade at its current price.
    pub async fn purchase_upgrade(&self, upgrade_id: impl Into<String>) -> Result<ActionStatus> {
        let upgrade_id = upgrade_id.into();
        self.request(|reply| Command::PurchaseUpgrade { upgrade_id, reply })
            .await
    }

    /// Buy the next level of an upgrade at a price the caller quoted.
    ///
    /// Rejected when `cost` exceeds the currency held when the command lands.
    pub async fn purchase_upgrade_at(
        &self,
        upgrade_id: impl Into<String>,
        cost: f64,
    ) -> Result<ActionStatus> {
        let upgrade_id = upgrade_id.into();
        self.request(|reply| Command::PurchaseUpgradeAt {
            upgrade_id,
            cost,
            reply,
        })
        .await
    }

    /// Prestige into the next tier.
    pub async fn advance_tier(&self) -> Result<ActionStatus> {
        self.request(|reply| Command::AdvanceTier { reply }).await
    }

    /// Query the current state and derived stats (read-only snapshot)
    pub async fn snapshot(&self) -> Result<Snapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Start producing on a repeat until the returned guard is released or
    /// dropped.
    pub fn hold_produce(&self) -> ProduceHold {
        self.hold_produce_every(self.hold_interval)
    }

    pub fn hold_produce_every(&self, interval: Duration) -> ProduceHold {
        ProduceHold::start(self.clone(), interval)
    }

    /// Most recent news headline.
    pub fn headline(&self) -> String {
        self.headline.borrow().clone()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Applied and rejected actions, clock ticks
    /// - `Topic::Presentation` - Production cues for animations
    /// - `Topic::Headline` - News ticker updates
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    pub(crate) async fn shutdown_worker(&self) {
        // Already gone when the worker exited on its own.
        let _ = self.command_tx.send(Command::Shutdown).await;
    }
}
