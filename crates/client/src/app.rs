//! Glue code tying the runtime, catalog, and terminal frontend together.
use std::sync::Arc;

use anyhow::Result;
use game_core::{Catalog, CatalogOracle};
use runtime::{
    ActionStatus, Event, HeadlineEvent, Runtime, RuntimeError, RuntimeHandle, Snapshot, Topic,
};
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::broadcast;

use crate::bootstrap::{RuntimeSetup, start_runtime};
use crate::config::ClientConfig;
use crate::format::{format_money, format_number};
use crate::input::{Command, HELP};
use crate::presentation::{describe_rejection, render_shop, render_status};

pub struct CliApp {
    runtime: Runtime,
    catalog: Arc<Catalog>,
}

pub struct CliAppBuilder {
    config: ClientConfig,
}

impl CliAppBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<CliApp> {
        let RuntimeSetup { runtime, catalog } = start_runtime(&self.config)?;
        Ok(CliApp { runtime, catalog })
    }
}

/// What the loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

impl CliApp {
    pub fn builder(config: ClientConfig) -> CliAppBuilder {
        CliAppBuilder::new(config)
    }

    pub fn from_parts(runtime: Runtime, catalog: Arc<Catalog>) -> Self {
        Self { runtime, catalog }
    }

    /// Runs the prompt on stdin/stdout until `quit` or end of input.
    pub async fn run(self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Runs the prompt over arbitrary streams.
    pub async fn run_with<R, W>(self, input: R, mut output: W) -> Result<()>
    where
        R: tokio::io::AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("CLI client starting...");

        let handle = self.runtime.handle();
        let mut headlines = handle.subscribe(Topic::Headline);
        let mut headlines_open = true;
        let mut lines = input.lines();

        write_block(&mut output, "Welcome to Steak Inc. Type `help` for commands.").await?;
        write_block(&mut output, &format!("NEWS: {}", handle.headline())).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    let reply = match Command::parse(&line) {
                        Ok(Some(command)) => match self.dispatch(&handle, command).await? {
                            (Flow::Quit, text) => {
                                write_block(&mut output, &text).await?;
                                break;
                            }
                            (Flow::Continue, text) => text,
                        },
                        Ok(None) => continue,
                        Err(error) => error.to_string(),
                    };
                    write_block(&mut output, &reply).await?;
                }
                event = headlines.recv(), if headlines_open => match event {
                    Ok(Event::Headline(HeadlineEvent::HeadlineUpdated { headline })) => {
                        write_block(&mut output, &format!("NEWS: {}", headline)).await?;
                    }
                    Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => headlines_open = false,
                },
            }
        }

        drop(handle);
        self.runtime.shutdown().await?;
        tracing::info!("CLI client stopped");
        Ok(())
    }

    async fn dispatch(
        &self,
        handle: &RuntimeHandle,
        command: Command,
    ) -> Result<(Flow, String), RuntimeError> {
        let text = match command {
            Command::Hatch => {
                let status = handle.produce().await?;
                let snapshot = handle.snapshot().await?;
                outcome(status, || {
                    format!(
                        "Hatched! Herd {}/{}.",
                        format_number(snapshot.state.unit_count),
                        format_number(snapshot.stats.housing_capacity)
                    )
                })
            }
            Command::Hold(duration) => {
                let before = handle.snapshot().await?.state.unit_count;
                let hold = handle.hold_produce();
                tokio::time::sleep(duration).await;
                hold.release().await;
                let snapshot = handle.snapshot().await?;
                format!(
                    "Held for {} ms: +{} cows, herd {}/{}.",
                    duration.as_millis(),
                    format_number(snapshot.state.unit_count - before),
                    format_number(snapshot.state.unit_count),
                    format_number(snapshot.stats.housing_capacity)
                )
            }
            Command::Buy(upgrade_id) => {
                let status = handle.purchase_upgrade(upgrade_id.as_str()).await?;
                let snapshot = handle.snapshot().await?;
                outcome(status, || {
                    format!(
                        "Bought {} (level {}). {} left.",
                        upgrade_id,
                        snapshot.state.upgrade_level(&upgrade_id),
                        format_money(snapshot.state.currency)
                    )
                })
            }
            Command::Shop(category) => {
                let snapshot = handle.snapshot().await?;
                render_shop(&snapshot, self.catalog.as_ref(), category)
            }
            Command::Prestige => {
                let status = handle.advance_tier().await?;
                let snapshot = handle.snapshot().await?;
                outcome(status, || self.prestige_message(&snapshot))
            }
            Command::Status => {
                let snapshot = handle.snapshot().await?;
                render_status(&snapshot, self.catalog.as_ref())
            }
            Command::News => format!("NEWS: {}", handle.headline()),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok((Flow::Quit, "Goodbye, rancher.".to_string())),
        };

        Ok((Flow::Continue, text))
    }

    fn prestige_message(&self, snapshot: &Snapshot) -> String {
        let breed = self
            .catalog
            .tier(snapshot.state.current_tier_index)
            .map_or("a new breed", |tier| tier.name.as_str());
        format!("The ranch starts over with {}. Every steak is worth more now.", breed)
    }
}

fn outcome(status: ActionStatus, applied: impl FnOnce() -> String) -> String {
    match status {
        ActionStatus::Applied => applied(),
        ActionStatus::Rejected(error) => describe_rejection(&error),
    }
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
