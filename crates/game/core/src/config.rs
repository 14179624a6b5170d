/// Economic constants and tunable parameters.
///
/// The base values feed the stats aggregator; `tick_interval_ms` is the
/// cadence of the simulation clock. Accrual scales by elapsed time, so the
/// cadence affects smoothness only, never totals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Housing capacity before any habitat upgrades.
    pub base_housing: f64,
    /// Units shipped per second before any transport upgrades.
    pub base_shipping: f64,
    /// Value of one shipped unit before tier and research multipliers.
    pub base_unit_value: f64,
    /// Output per unit per second.
    pub base_unit_production: f64,
    /// Simulation clock cadence in milliseconds.
    pub tick_interval_ms: u64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_HOUSING: f64 = 10.0;
    pub const DEFAULT_BASE_SHIPPING: f64 = 5.0;
    pub const DEFAULT_BASE_UNIT_VALUE: f64 = 1.0;
    pub const DEFAULT_BASE_UNIT_PRODUCTION: f64 = 1.0;
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

    pub fn new() -> Self {
        Self {
            base_housing: Self::DEFAULT_BASE_HOUSING,
            base_shipping: Self::DEFAULT_BASE_SHIPPING,
            base_unit_value: Self::DEFAULT_BASE_UNIT_VALUE,
            base_unit_production: Self::DEFAULT_BASE_UNIT_PRODUCTION,
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
        }
    }

    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Fraction of a second covered by one clock tick.
    pub fn tick_fraction(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
