//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the simulation.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{CatalogOracle, GameConfig, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::headline::{HeadlineProvider, INITIAL_HEADLINE};
use crate::workers::{Command, HeadlineWorker, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Repeat rate of press-and-hold production
    pub hold_interval: Duration,
    /// Delay before the first headline request
    pub headline_initial_delay: Duration,
    pub headline_interval: Duration,
    /// Upper bound on one headline request
    pub headline_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            hold_interval: Duration::from_millis(100),
            headline_initial_delay: Duration::from_secs(2),
            headline_interval: Duration::from_secs(30),
            headline_timeout: Duration::from_secs(10),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TICK_INTERVAL_MS` - Simulation clock period (default: 100)
    /// - `HOLD_INTERVAL_MS` - Press-and-hold repeat rate (default: 100)
    /// - `HEADLINE_INTERVAL_SECS` - Seconds between headlines (default: 30)
    /// - `EVENT_BUFFER` - Per-topic event channel capacity (default: 100)
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Overlays environment variables on top of `self`.
    pub fn with_env(mut self) -> Self {
        if let Some(ms) = read_env::<u64>("TICK_INTERVAL_MS") {
            self.game_config.tick_interval_ms = ms.max(1);
        }

        if let Some(ms) = read_env::<u64>("HOLD_INTERVAL_MS") {
            self.hold_interval = Duration::from_millis(ms.max(1));
        }

        if let Some(secs) = read_env::<u64>("HEADLINE_INTERVAL_SECS") {
            self.headline_interval = Duration::from_secs(secs.max(1));
        }

        if let Some(capacity) = read_env::<usize>("EVENT_BUFFER") {
            self.event_buffer_size = capacity.max(1);
        }

        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates the simulation
///
/// Runtime owns the workers; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
    headline_worker_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stop the clock and all workers.
    ///
    /// Handles that outlive the runtime get [`RuntimeError::CommandChannelClosed`].
    pub async fn shutdown(self) -> Result<()> {
        if let Some(headline) = self.headline_worker_handle {
            headline.abort();
            match headline.await {
                Ok(()) => {}
                Err(error) if error.is_cancelled() => {}
                Err(error) => return Err(RuntimeError::WorkerJoin(error)),
            }
        }

        self.handle.shutdown_worker().await;
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        info!("Runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    catalog: Option<Arc<dyn CatalogOracle>>,
    headline_provider: Option<Arc<dyn HeadlineProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            catalog: None,
            headline_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state (default: a fresh ranch)
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the required tier and upgrade catalog
    pub fn catalog(mut self, catalog: impl CatalogOracle + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    pub fn shared_catalog(mut self, catalog: Arc<dyn CatalogOracle>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Enable the headline ticker with the given provider (optional)
    pub fn headline_provider(mut self, provider: impl HeadlineProvider + 'static) -> Self {
        self.headline_provider = Some(Arc::new(provider));
        self
    }

    /// Build the runtime and spawn its workers
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;

        if self.config.game_config.tick_interval_ms == 0 {
            return Err(RuntimeError::ZeroTickInterval);
        }

        let initial_state = self.state.unwrap_or_else(|| GameState::initial(unix_time_ms()));
        if initial_state.current_tier_index >= catalog.tier_count() {
            return Err(RuntimeError::InvalidInitialTier {
                index: initial_state.current_tier_index,
                count: catalog.tier_count(),
            });
        }

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (headline_tx, headline_rx) = watch::channel(INITIAL_HEADLINE.to_string());

        let handle = RuntimeHandle::new(
            command_tx,
            event_bus.clone(),
            headline_rx,
            self.config.hold_interval,
        );

        let sim_worker = SimulationWorker::new(
            initial_state,
            catalog,
            self.config.game_config.clone(),
            command_rx,
            event_bus.clone(),
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        let headline_worker_handle = self.headline_provider.map(|provider| {
            let worker = HeadlineWorker::new(
                handle.clone(),
                provider,
                event_bus,
                headline_tx,
                self.config.headline_initial_delay,
                self.config.headline_interval,
                self.config.headline_timeout,
            );
            tokio::spawn(async move {
                worker.run().await;
            })
        });

        info!(
            headline = headline_worker_handle.is_some(),
            "Runtime started"
        );

        Ok(Runtime {
            handle,
            sim_worker_handle,
            headline_worker_handle,
        })
    }
}

fn unix_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
