//! Press-and-hold production.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use super::handle::RuntimeHandle;

/// Guard for a running hold. Produces once immediately and then once per
/// interval until [`ProduceHold::release`] is awaited or the guard is dropped.
#[must_use = "dropping a ProduceHold stops production immediately"]
pub struct ProduceHold {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ProduceHold {
    pub(crate) fn start(handle: RuntimeHandle, interval: Duration) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {}
                }
                if let Err(error) = handle.produce().await {
                    debug!(%error, "Stopping hold, runtime unavailable");
                    break;
                }
            }
        });

        Self {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    /// Stops the hold and waits for a produce already sent to be applied.
    ///
    /// No produce lands after this returns. Dropping the guard instead aborts
    /// the task, and a produce command already in the worker's queue is
    /// still applied.
    pub async fn release(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take()
            && let Err(error) = task.await
        {
            debug!(%error, "Hold task ended abnormally");
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ProduceHold {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
