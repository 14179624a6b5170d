//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], executes actions via
//! [`game_core::GameEngine`], advances the clock, and publishes events to the
//! EventBus. Commands and ticks are handled one at a time on a single task,
//! so every action sees the state left by the one before it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, trace};

use game_core::{
    Action, ActionResult, CatalogOracle, ExecuteError, GameConfig, GameEngine, GameEnv, GameState,
    PurchaseError, TransitionPhase, TransitionPhaseError,
};

use crate::api::{ActionStatus, Snapshot};
use crate::events::{Event, EventBus, GameStateEvent, PresentationEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Produce units (one manual press).
    Produce { reply: oneshot::Sender<ActionStatus> },
    /// Buy the next level of an upgrade at the price quoted when the command
    /// is applied. Unknown and capped upgrades are refused at the quote.
    PurchaseUpgrade {
        upgrade_id: String,
        reply: oneshot::Sender<ActionStatus>,
    },
    /// Buy the next level of an upgrade at a caller-supplied price.
    PurchaseUpgradeAt {
        upgrade_id: String,
        cost: f64,
        reply: oneshot::Sender<ActionStatus>,
    },
    /// Prestige into the next tier.
    AdvanceTier { reply: oneshot::Sender<ActionStatus> },
    /// Query the current snapshot (read-only).
    QuerySnapshot { reply: oneshot::Sender<Snapshot> },
    /// Stop the worker even if handles are still alive.
    Shutdown,
}

/// Background task that processes gameplay commands and clock ticks.
pub struct SimulationWorker {
    state: GameState,
    catalog: Arc<dyn CatalogOracle>,
    config: GameConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    produce_requests: u64,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        catalog: Arc<dyn CatalogOracle>,
        config: GameConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            tier = state.current_tier_index,
            tick_ms = config.tick_interval_ms,
            "SimulationWorker initialized"
        );

        Self {
            state,
            catalog,
            config,
            command_rx,
            event_bus,
            produce_requests: 0,
        }
    }

    /// Main worker loop.
    ///
    /// Missed ticks are skipped rather than replayed, so a stalled process
    /// does not earn a burst of catch-up income.
    pub async fn run(mut self) {
        let period = Duration::from_millis(self.config.tick_interval_ms);
        let mut ticker = time::interval_at(time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_cmd = self.command_rx.recv() => match maybe_cmd {
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.handle_command(cmd),
                },
                _ = ticker.tick() => self.handle_tick(),
            }
        }

        debug!("SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Produce { reply } => {
                self.produce_requests += 1;
                self.event_bus
                    .publish(Event::Presentation(PresentationEvent::ProduceTriggered {
                        count: self.produce_requests,
                    }));

                let status = self.apply(Action::produce());
                Self::reply(reply, status, "Produce");
            }
            Command::PurchaseUpgrade { upgrade_id, reply } => {
                let status = match self.state.quote_upgrade(&*self.catalog, &upgrade_id) {
                    Ok(cost) => self.apply(Action::purchase(upgrade_id, cost)),
                    Err(error) => self.reject_quote(error),
                };
                Self::reply(reply, status, "PurchaseUpgrade");
            }
            Command::PurchaseUpgradeAt {
                upgrade_id,
                cost,
                reply,
            } => {
                let status = self.apply(Action::purchase(upgrade_id, cost));
                Self::reply(reply, status, "PurchaseUpgradeAt");
            }
            Command::AdvanceTier { reply } => {
                let status = self.apply(Action::advance_tier());
                Self::reply(reply, status, "AdvanceTier");
            }
            Command::QuerySnapshot { reply } => {
                Self::reply(reply, self.snapshot(), "QuerySnapshot");
            }
            Command::Shutdown => {}
        }
    }

    fn reply<T>(reply: oneshot::Sender<T>, value: T, command: &'static str) {
        if reply.send(value).is_err() {
            debug!(command, "reply channel closed (caller dropped)");
        }
    }

    fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&*self.catalog, &self.config)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.env())
    }

    /// Executes a player action and publishes the outcome.
    ///
    /// This is the only place player actions reach `GameEngine::execute()`.
    fn apply(&mut self, action: Action) -> ActionStatus {
        let kind = action.kind();
        let env = GameEnv::new(&*self.catalog, &self.config);
        let result = GameEngine::new(&mut self.state).execute(env, &action);

        match result {
            Ok(outcome) => {
                if let ActionResult::TierAdvanced(advance) = &outcome.action_result {
                    info!(from = advance.from, to = advance.to, "Advanced tier");
                }
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::StateChanged {
                        action: kind,
                        delta: outcome.delta,
                        snapshot: Box::new(self.snapshot()),
                    }));
                ActionStatus::Applied
            }
            Err(error) => self.publish_rejection(kind, error),
        }
    }

    fn reject_quote(&self, error: PurchaseError) -> ActionStatus {
        let error =
            ExecuteError::Purchase(TransitionPhaseError::new(TransitionPhase::PreValidate, error));
        self.publish_rejection(game_core::ActionKind::PurchaseUpgrade, error)
    }

    fn publish_rejection(&self, action: game_core::ActionKind, error: ExecuteError) -> ActionStatus {
        debug!(
            target: "runtime::worker",
            action = %action,
            phase = error.phase().as_str(),
            error = %error.message(),
            "Action rejected"
        );
        self.event_bus
            .publish(Event::GameState(GameStateEvent::ActionRejected {
                action,
                reason: error.clone(),
            }));
        ActionStatus::Rejected(error)
    }

    /// Accrues one interval of income.
    fn handle_tick(&mut self) {
        let env = GameEnv::new(&*self.catalog, &self.config);
        let income = GameEngine::new(&mut self.state).accrue(env, self.config.tick_interval_ms);

        trace!(income, currency = self.state.currency, "tick");
        self.event_bus.publish(Event::GameState(GameStateEvent::Ticked {
            income,
            snapshot: Box::new(self.snapshot()),
        }));
    }
}
