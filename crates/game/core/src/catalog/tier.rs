/// A production tier unlocked by prestige.
///
/// Tiers are ordered; index 0 is the starting tier and its `unlock_cost` is
/// never charged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Scales the value of every shipped unit.
    pub value_multiplier: f64,
    /// Currency required to advance into this tier from the previous one.
    pub unlock_cost: f64,
}

impl TierDefinition {
    pub fn new(id: impl Into<String>, value_multiplier: f64, unlock_cost: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            value_multiplier,
            unlock_cost,
        }
    }
}
