//! Prestige: advance to the next production tier.

use super::ActionTransition;
use super::error::AdvanceTierError;
use crate::env::GameEnv;
use crate::state::GameState;

/// Resets progress into the next tier.
///
/// The whole state is replaced by the initial snapshot, keeping only the new
/// tier index, lifetime earnings and session start time. The unlock cost is
/// a gate, not a charge: the balance is discarded by the reset anyway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceTierAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierAdvance {
    pub from: usize,
    pub to: usize,
}

impl ActionTransition for AdvanceTierAction {
    type Error = AdvanceTierError;
    type Result = TierAdvance;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let next = state.current_tier_index + 1;
        let tier = env
            .catalog()
            .next_tier(state.current_tier_index)
            .ok_or(AdvanceTierError::MaxTierReached {
                current: state.current_tier_index,
            })?;

        if state.currency < tier.unlock_cost {
            return Err(AdvanceTierError::InsufficientFunds {
                next,
                unlock_cost: tier.unlock_cost,
                currency: state.currency,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<TierAdvance, Self::Error> {
        let from = state.current_tier_index;
        let to = from + 1;

        let mut next = GameState::initial(state.start_time);
        next.current_tier_index = to;
        next.lifetime_earnings = state.lifetime_earnings;
        *state = next;

        Ok(TierAdvance { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TierDefinition};
    use crate::config::GameConfig;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                TierDefinition::new("holstein", 1.0, 0.0),
                TierDefinition::new("angus", 3.0, 10_000.0),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn resets_everything_but_tier_and_lifetime() {
        let catalog = catalog();
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config);
        let mut state = GameState::initial(1_700);
        state.currency = 12_000.0;
        state.unit_count = 7.0;
        state.lifetime_earnings = 30_000.0;
        state.purchased_upgrades.insert("barn".into(), 3);

        AdvanceTierAction.pre_validate(&state, &env).unwrap();
        let advance = AdvanceTierAction.apply(&mut state, &env).unwrap();

        assert_eq!(advance, TierAdvance { from: 0, to: 1 });
        assert_eq!(state.currency, 0.0);
        assert_eq!(state.unit_count, 0.0);
        assert!(state.purchased_upgrades.is_empty());
        assert_eq!(state.lifetime_earnings, 30_000.0);
        assert_eq!(state.current_tier_index, 1);
        assert_eq!(state.start_time, 1_700);
    }

    #[test]
    fn rejects_at_last_tier() {
        let catalog = catalog();
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config);
        let mut state = GameState::initial(0);
        state.current_tier_index = 1;
        state.currency = f64::MAX;

        let result = AdvanceTierAction.pre_validate(&state, &env);
        assert_eq!(result, Err(AdvanceTierError::MaxTierReached { current: 1 }));
    }

    #[test]
    fn rejects_unaffordable_tier() {
        let catalog = catalog();
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config);
        let mut state = GameState::initial(0);
        state.currency = 9_999.0;

        let result = AdvanceTierAction.pre_validate(&state, &env);
        assert!(matches!(
            result,
            Err(AdvanceTierError::InsufficientFunds { next: 1, .. })
        ));
    }
}
