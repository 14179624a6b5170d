use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast::error::TryRecvError;
use game_core::{ExecuteError, GameConfig, GameState, PurchaseError};
use runtime::headline::{FAILURE_HEADLINE, INITIAL_HEADLINE};
use runtime::{
    ActionStatus, Event, GameStateEvent, HeadlineError, HeadlineEvent, HeadlineProvider,
    PresentationEvent, Runtime, RuntimeConfig, RuntimeError, StaticHeadlineProvider, Topic,
};

fn start(state: GameState) -> Runtime {
    start_with(state, RuntimeConfig::default())
}

fn start_with(state: GameState, config: RuntimeConfig) -> Runtime {
    Runtime::builder()
        .config(config)
        .catalog(game_content::default_catalog().expect("shipped catalog"))
        .initial_state(state)
        .build()
        .expect("runtime should build")
}

#[tokio::test(start_paused = true)]
async fn produce_adds_units_and_reports_applied() {
    let runtime = start(GameState::initial(0));
    let handle = runtime.handle();

    assert_eq!(handle.produce().await.unwrap(), ActionStatus::Applied);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.unit_count, 1.0);
    assert_eq!(snapshot.stats.housing_capacity, 10.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn produce_cue_fires_even_when_housing_is_full() {
    let mut state = GameState::initial(0);
    state.unit_count = 10.0;
    let runtime = start(state);
    let handle = runtime.handle();
    let mut cues = handle.subscribe(Topic::Presentation);

    let status = handle.produce().await.unwrap();
    assert!(matches!(
        status,
        ActionStatus::Rejected(ExecuteError::Produce(_))
    ));

    match cues.recv().await.unwrap() {
        Event::Presentation(PresentationEvent::ProduceTriggered { count }) => {
            assert_eq!(count, 1)
        }
        other => panic!("unexpected event {:?}", other),
    }

    assert_eq!(handle.snapshot().await.unwrap().state.unit_count, 10.0);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn clock_accrues_income_each_tick() {
    let mut state = GameState::initial(0);
    state.unit_count = 4.0;
    let runtime = start(state);
    let handle = runtime.handle();

    // Ten 100 ms ticks; the first lands one period after start.
    tokio::time::sleep(Duration::from_millis(1_050)).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert!((snapshot.state.currency - 4.0).abs() < 1e-9);
    assert_eq!(snapshot.state.currency, snapshot.state.lifetime_earnings);
    assert_eq!(snapshot.state.unit_count, 4.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn stalled_clock_skips_missed_ticks() {
    let mut state = GameState::initial(0);
    state.unit_count = 4.0;
    let runtime = start(state);
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::GameState);

    // The worker is running and its clock is armed.
    assert_eq!(handle.snapshot().await.unwrap().state.currency, 0.0);

    // Ten periods pass in one jump with the worker never polled in between.
    tokio::time::advance(Duration::from_millis(1_000)).await;

    match events.recv().await.unwrap() {
        Event::GameState(GameStateEvent::Ticked { income, .. }) => {
            assert!((income - 0.4).abs() < 1e-9)
        }
        other => panic!("unexpected event {:?}", other),
    }
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

    // One tick of income, not the backlog of ten.
    let snapshot = handle.snapshot().await.unwrap();
    assert!((snapshot.state.currency - 0.4).abs() < 1e-9);
    assert_eq!(snapshot.state.currency, snapshot.state.lifetime_earnings);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn tick_interval_is_configurable() {
    let mut state = GameState::initial(0);
    state.unit_count = 4.0;
    let config = RuntimeConfig {
        game_config: GameConfig::default().with_tick_interval_ms(500),
        ..RuntimeConfig::default()
    };
    let runtime = start_with(state, config);
    let handle = runtime.handle();

    tokio::time::sleep(Duration::from_millis(1_050)).await;

    // Two 500 ms ticks earn the same per-second rate.
    let snapshot = handle.snapshot().await.unwrap();
    assert!((snapshot.state.currency - 4.0).abs() < 1e-9);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn purchase_quotes_cost_at_current_level() {
    let mut state = GameState::initial(0);
    state.currency = 100.0;
    let runtime = start(state);
    let handle = runtime.handle();

    assert!(handle.purchase_upgrade("small_barn").await.unwrap().is_applied());
    assert!(handle.purchase_upgrade("small_barn").await.unwrap().is_applied());

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.upgrade_level("small_barn"), 2);
    assert!((snapshot.state.currency - (100.0 - 15.0 - 15.0 * 1.15)).abs() < 1e-9);
    assert_eq!(snapshot.stats.housing_capacity, 20.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn purchase_at_caller_cost_checks_funds_against_that_cost() {
    let mut state = GameState::initial(0);
    state.currency = 20.0;
    let runtime = start(state);
    let handle = runtime.handle();

    let status = handle.purchase_upgrade_at("pickup_truck", 25.0).await.unwrap();
    assert!(matches!(
        status,
        ActionStatus::Rejected(ExecuteError::Purchase(ref e))
            if matches!(e.error, PurchaseError::InsufficientFunds { .. })
    ));

    let status = handle.purchase_upgrade_at("pickup_truck", 20.0).await.unwrap();
    assert_eq!(status, ActionStatus::Applied);
    assert_eq!(handle.snapshot().await.unwrap().state.currency, 0.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn unknown_upgrade_is_rejected_and_published() {
    let runtime = start(GameState::initial(0));
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::GameState);

    let status = handle.purchase_upgrade("gold_plated_barn").await.unwrap();
    assert!(matches!(
        status,
        ActionStatus::Rejected(ExecuteError::Purchase(ref e))
            if e.error == PurchaseError::UnknownUpgrade("gold_plated_barn".into())
    ));

    loop {
        match events.recv().await.unwrap() {
            Event::GameState(GameStateEvent::ActionRejected { reason, .. }) => {
                assert_eq!(ActionStatus::Rejected(reason), status);
                break;
            }
            Event::GameState(GameStateEvent::Ticked { .. }) => continue,
            other => panic!("unexpected event {:?}", other),
        }
    }

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn shop_purchase_refuses_capped_upgrade_but_caller_cost_does_not() {
    let mut state = GameState::initial(0);
    state.currency = 1e9;
    state.purchased_upgrades.insert("premium_branding".into(), 10);
    let runtime = start(state);
    let handle = runtime.handle();

    let status = handle.purchase_upgrade("premium_branding").await.unwrap();
    assert!(matches!(
        status,
        ActionStatus::Rejected(ExecuteError::Purchase(ref e))
            if matches!(e.error, PurchaseError::MaxLevelReached { max_level: 10, .. })
    ));
    assert_eq!(handle.snapshot().await.unwrap().state.currency, 1e9);

    let status = handle
        .purchase_upgrade_at("premium_branding", 1_000.0)
        .await
        .unwrap();
    assert_eq!(status, ActionStatus::Applied);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.upgrade_level("premium_branding"), 11);
    assert_eq!(snapshot.state.currency, 1e9 - 1_000.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn advance_tier_resets_progress() {
    let mut state = GameState::initial(7);
    state.currency = 12_000.0;
    state.unit_count = 10.0;
    state.lifetime_earnings = 50_000.0;
    state.purchased_upgrades.insert("small_barn".into(), 3);
    let runtime = start(state);
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::GameState);

    assert_eq!(handle.advance_tier().await.unwrap(), ActionStatus::Applied);

    let snapshot = loop {
        match events.recv().await.unwrap() {
            Event::GameState(GameStateEvent::StateChanged { snapshot, .. }) => break snapshot,
            Event::GameState(GameStateEvent::Ticked { .. }) => continue,
            other => panic!("unexpected event {:?}", other),
        }
    };

    assert_eq!(snapshot.state.current_tier_index, 1);
    assert_eq!(snapshot.state.currency, 0.0);
    assert_eq!(snapshot.state.unit_count, 0.0);
    assert!(snapshot.state.purchased_upgrades.is_empty());
    assert_eq!(snapshot.state.lifetime_earnings, 50_000.0);
    assert_eq!(snapshot.stats.unit_value, 3.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn hold_produces_until_released() {
    let runtime = start(GameState::initial(0));
    let handle = runtime.handle();

    let hold = handle.hold_produce_every(Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(hold.is_active());
    hold.release().await;

    // Nothing in flight lands after release returns.
    assert_eq!(handle.snapshot().await.unwrap().state.unit_count, 4.0);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(handle.snapshot().await.unwrap().state.unit_count, 4.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn release_waits_for_an_in_flight_produce() {
    let runtime = start(GameState::initial(0));
    let handle = runtime.handle();

    let hold = handle.hold_produce_every(Duration::from_millis(100));
    // Let the first press reach the worker queue, then release at once.
    tokio::task::yield_now().await;
    hold.release().await;

    let after_release = handle.snapshot().await.unwrap().state.unit_count;
    assert!(after_release <= 1.0);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(handle.snapshot().await.unwrap().state.unit_count, after_release);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn dropping_hold_stops_production() {
    let runtime = start(GameState::initial(0));
    let handle = runtime.handle();

    {
        let _hold = handle.hold_produce();
        tokio::time::sleep(Duration::from_millis(150)).await;
    }

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(handle.snapshot().await.unwrap().state.unit_count, 2.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn headline_worker_publishes_after_initial_delay() {
    let runtime = Runtime::builder()
        .catalog(game_content::default_catalog().unwrap())
        .initial_state(GameState::initial(0))
        .headline_provider(StaticHeadlineProvider::new(["Cows demand dental plan."]))
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut headlines = handle.subscribe(Topic::Headline);

    assert_eq!(handle.headline(), INITIAL_HEADLINE);

    let start = tokio::time::Instant::now();
    match headlines.recv().await.unwrap() {
        Event::Headline(HeadlineEvent::HeadlineUpdated { headline }) => {
            assert_eq!(headline, "Cows demand dental plan.")
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert_eq!(handle.headline(), "Cows demand dental plan.");

    runtime.shutdown().await.unwrap();
}

struct StalledProvider;

#[async_trait]
impl HeadlineProvider for StalledProvider {
    async fn headline(&self, _summary: &str) -> Result<String, HeadlineError> {
        std::future::pending().await
    }
}

#[tokio::test(start_paused = true)]
async fn stalled_provider_falls_back_after_timeout() {
    let config = RuntimeConfig {
        headline_timeout: Duration::from_secs(1),
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::builder()
        .config(config)
        .catalog(game_content::default_catalog().unwrap())
        .headline_provider(StalledProvider)
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut headlines = handle.subscribe(Topic::Headline);

    match headlines.recv().await.unwrap() {
        Event::Headline(HeadlineEvent::HeadlineUpdated { headline }) => {
            assert_eq!(headline, FAILURE_HEADLINE)
        }
        other => panic!("unexpected event {:?}", other),
    }

    // The simulation kept serving while the provider hung.
    assert!(handle.produce().await.unwrap().is_applied());

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn handles_fail_after_shutdown() {
    let runtime = start(GameState::initial(0));
    let handle = runtime.handle();

    runtime.shutdown().await.unwrap();

    assert!(matches!(
        handle.produce().await,
        Err(RuntimeError::CommandChannelClosed)
    ));
}

#[tokio::test]
async fn build_requires_catalog() {
    let result = Runtime::builder().build();
    assert!(matches!(result, Err(RuntimeError::MissingCatalog)));
}

#[tokio::test]
async fn build_rejects_state_beyond_last_tier() {
    let mut state = GameState::initial(0);
    state.current_tier_index = 9;

    let result = Runtime::builder()
        .catalog(game_content::default_catalog().unwrap())
        .initial_state(state)
        .build();
    assert!(matches!(
        result,
        Err(RuntimeError::InvalidInitialTier { index: 9, count: 5 })
    ));
}
