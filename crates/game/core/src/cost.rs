//! Geometric cost curve for repeatable purchases.

/// Price of the next unit of an upgrade.
///
/// `level` is the number of units already owned, so `level = 0` prices the
/// first purchase at exactly `base_cost`. Callers pass non-negative levels
/// from catalog-validated upgrades (`multiplier > 1`); other inputs are not
/// defended against.
#[inline]
pub fn upgrade_cost(base_cost: f64, multiplier: f64, level: u32) -> f64 {
    base_cost * multiplier.powf(f64::from(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_purchase_costs_base() {
        assert_eq!(upgrade_cost(15.0, 1.15, 0), 15.0);
    }

    #[test]
    fn each_level_multiplies_previous_price() {
        for level in 0..20 {
            let current = upgrade_cost(100.0, 1.5, level);
            let next = upgrade_cost(100.0, 1.5, level + 1);
            assert!((next - current * 1.5).abs() <= next * 1e-12);
        }
    }

    #[test]
    fn price_strictly_increases() {
        let prices: Vec<f64> = (0..10).map(|l| upgrade_cost(25.0, 1.15, l)).collect();
        assert!(prices.windows(2).all(|w| w[1] > w[0]));
    }
}
