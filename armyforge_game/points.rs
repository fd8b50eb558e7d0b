use armyforge_types::roster::RosterUnit;

/// Total points of a roster: the sum of every entry's effective cost
/// (`total_cost`, else `base_cost`, else 0).
pub fn army_points(units: &[RosterUnit]) -> i64 {
    units
        .iter()
        .fold(0i64, |acc, unit| acc.saturating_add(unit.effective_cost()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RosterUnitFactoryOptions, roster_unit_factory};

    #[test]
    fn test_empty_roster_is_worth_nothing() {
        assert_eq!(army_points(&[]), 0);
    }

    #[test]
    fn test_army_points_uses_total_then_base_then_zero() {
        let units = vec![
            roster_unit_factory(RosterUnitFactoryOptions {
                base_cost: Some(65),
                total_cost: Some(115),
                ..Default::default()
            }),
            roster_unit_factory(RosterUnitFactoryOptions {
                base_cost: Some(95),
                ..Default::default()
            }),
            roster_unit_factory(RosterUnitFactoryOptions::default()),
        ];

        assert_eq!(army_points(&units), 115 + 95);
    }
}
