use bitflags::bitflags;

use super::GameState;

bitflags! {
    /// Tracks which fields of a [`GameState`] changed during a transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateFields: u8 {
        const CURRENCY  = 1 << 0;
        const UNITS     = 1 << 1;
        const TIER      = 1 << 2;
        const LIFETIME  = 1 << 3;
        const UPGRADES  = 1 << 4;
    }
}

/// Change summary between two states.
///
/// Callers distinguish an accepted action from a no-op by checking
/// [`StateDelta::is_empty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    pub fields: StateFields,
}

impl StateDelta {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_states(before: &GameState, after: &GameState) -> Self {
        let mut fields = StateFields::empty();
        fields.set(StateFields::CURRENCY, before.currency != after.currency);
        fields.set(StateFields::UNITS, before.unit_count != after.unit_count);
        fields.set(
            StateFields::TIER,
            before.current_tier_index != after.current_tier_index,
        );
        fields.set(
            StateFields::LIFETIME,
            before.lifetime_earnings != after.lifetime_earnings,
        );
        fields.set(
            StateFields::UPGRADES,
            before.purchased_upgrades != after.purchased_upgrades,
        );
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, fields: StateFields) -> bool {
        self.fields.contains(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_states_produce_empty_delta() {
        let state = GameState::initial(42);
        assert!(StateDelta::from_states(&state, &state.clone()).is_empty());
    }

    #[test]
    fn records_each_changed_field() {
        let before = GameState::initial(0);
        let mut after = before.clone();
        after.currency = 5.0;
        after.purchased_upgrades.insert("small_barn".into(), 1);

        let delta = StateDelta::from_states(&before, &after);
        assert!(delta.contains(StateFields::CURRENCY | StateFields::UPGRADES));
        assert!(!delta.contains(StateFields::UNITS));
    }
}
