use armyforge_types::{
    roster::RosterUnit,
    validation::{ValidationError, ValidationResult},
};

use crate::points::army_points;

pub const DEFAULT_POINTS_PER_HERO: i64 = 375;
pub const DEFAULT_MAX_UNIT_SHARE_PERCENT: i64 = 35;

/// Army-list rules checked at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterRules {
    points_per_hero: i64,
    max_unit_share_percent: i64,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self {
            points_per_hero: DEFAULT_POINTS_PER_HERO,
            max_unit_share_percent: DEFAULT_MAX_UNIT_SHARE_PERCENT,
        }
    }
}

impl RosterRules {
    /// `points_per_hero` is clamped to at least 1.
    pub fn new(points_per_hero: i64, max_unit_share_percent: i64) -> Self {
        Self {
            points_per_hero: points_per_hero.max(1),
            max_unit_share_percent,
        }
    }

    pub fn points_per_hero(&self) -> i64 {
        self.points_per_hero
    }

    pub fn max_unit_share_percent(&self) -> i64 {
        self.max_unit_share_percent
    }

    /// One hero per `points_per_hero` points, rounded down.
    pub fn max_heroes(&self, points_limit: i64) -> i64 {
        points_limit.div_euclid(self.points_per_hero)
    }

    /// The most a single entry may cost, rounded down.
    ///
    /// Exact integer arithmetic on purpose: a float `limit * 0.35` lands just
    /// under the whole value for limits such as 700 or 1400 (244 instead of 245).
    pub fn max_unit_cost(&self, points_limit: i64) -> i64 {
        points_limit
            .saturating_mul(self.max_unit_share_percent)
            .div_euclid(100)
    }

    /// Checks a roster against the rules.
    ///
    /// Never fails: missing costs count as zero, a missing category is not a
    /// hero, and non-positive limits go through the same arithmetic. Findings
    /// are ordered hero cap, per-unit caps (roster order), points total.
    pub fn validate(&self, points_limit: i64, units: &[RosterUnit]) -> ValidationResult {
        let mut errors = Vec::new();

        let total_points = army_points(units);
        let current_hero_count = units.iter().filter(|u| u.is_hero()).count() as i64;
        let max_hero_count = self.max_heroes(points_limit);

        if current_hero_count > max_hero_count {
            errors.push(ValidationError::error(
                format!(
                    "Too many heroes! Maximum {max_hero_count} heroes for {points_limit} pts (1 hero / {} pts)",
                    self.points_per_hero
                ),
                None,
            ));
        }

        let max_unit_cost = self.max_unit_cost(points_limit);
        for unit in units {
            let unit_cost = unit.effective_cost();
            if unit_cost > max_unit_cost {
                let unit_name = if unit.unit_name.is_empty() {
                    "Unknown"
                } else {
                    unit.unit_name.as_str()
                };
                errors.push(ValidationError::error(
                    format!(
                        "Unit '{unit_name}' costs {unit_cost} pts, maximum allowed: {max_unit_cost} pts ({}% of {points_limit})",
                        self.max_unit_share_percent
                    ),
                    unit.id.clone(),
                ));
            }
        }

        if total_points > points_limit {
            errors.push(ValidationError::error(
                format!("Army exceeds the points limit! {total_points}/{points_limit} pts"),
                None,
            ));
        }

        ValidationResult {
            valid: !errors.iter().any(ValidationError::is_error),
            errors,
            total_points,
            max_hero_count,
            current_hero_count,
        }
    }
}

/// Validates a roster with the default rules.
pub fn validate(points_limit: i64, units: &[RosterUnit]) -> ValidationResult {
    RosterRules::default().validate(points_limit, units)
}

#[cfg(test)]
mod tests {
    use armyforge_types::{roster::UnitCategory, validation::Severity};

    use super::*;
    use crate::test_utils::{RosterUnitFactoryOptions, hero, roster_unit_factory, unit};

    #[test]
    fn test_max_heroes_rounds_down() {
        let rules = RosterRules::default();

        assert_eq!(rules.max_heroes(0), 0);
        assert_eq!(rules.max_heroes(374), 0);
        assert_eq!(rules.max_heroes(375), 1);
        assert_eq!(rules.max_heroes(500), 1);
        assert_eq!(rules.max_heroes(1000), 2);
        assert_eq!(rules.max_heroes(2000), 5);
    }

    #[test]
    fn test_max_unit_cost_rounds_down() {
        let rules = RosterRules::default();

        assert_eq!(rules.max_unit_cost(1000), 350);
        assert_eq!(rules.max_unit_cost(750), 262);
        assert_eq!(rules.max_unit_cost(0), 0);
        assert_eq!(rules.max_unit_cost(700), 245);
        assert_eq!(rules.max_unit_cost(1400), 490);
    }

    #[test]
    fn test_scenario_valid_army() {
        let units = vec![hero(100), unit(200)];
        let result = validate(1000, &units);

        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.total_points, 300);
        assert_eq!(result.current_hero_count, 1);
        assert_eq!(result.max_hero_count, 2);
    }

    #[test]
    fn test_scenario_too_many_heroes() {
        let units = vec![hero(100), hero(100)];
        let result = validate(500, &units);

        assert!(!result.valid);
        assert_eq!(result.max_hero_count, 1);
        assert_eq!(result.current_hero_count, 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].severity, Severity::Error);
        assert_eq!(result.errors[0].unit_id, None);
        assert!(result.errors[0].message.contains("heroes"));
        assert!(result.errors[0].message.contains("375"));
    }

    #[test]
    fn test_scenario_unit_over_share_cap() {
        let expensive = unit(400);
        let result = validate(1000, std::slice::from_ref(&expensive));

        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].unit_id, expensive.id.clone());
        assert!(result.errors[0].message.contains("400"));
        assert!(result.errors[0].message.contains("350"));
        assert!(result.errors[0].message.contains("35%"));
    }

    #[test]
    fn test_unit_at_share_cap_is_allowed() {
        let result = validate(1000, &[unit(350)]);

        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_every_expensive_unit_gets_its_own_error() {
        let units = vec![unit(400), unit(100), unit(360), unit(400)];
        let result = validate(2000, &units);

        // cap is 700 at 2000 pts, nothing trips
        assert!(result.valid);

        let result = validate(1000, &units);
        let unit_errors: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.unit_id.is_some())
            .map(|e| e.unit_id.clone())
            .collect();
        assert_eq!(
            unit_errors,
            vec![units[0].id.clone(), units[2].id.clone(), units[3].id.clone()]
        );
    }

    #[test]
    fn test_points_total_over_limit() {
        let units = vec![unit(300), unit(300), unit(300), unit(300)];
        let result = validate(1000, &units);

        assert!(!result.valid);
        assert_eq!(result.total_points, 1200);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].unit_id, None);
        assert!(result.errors[0].message.contains("1200/1000"));
    }

    #[test]
    fn test_errors_are_ordered_hero_units_total() {
        let units = vec![hero(50), hero(400), hero(50), unit(500)];
        let result = validate(500, &units);

        assert_eq!(result.errors.len(), 4);
        assert!(result.errors[0].message.starts_with("Too many heroes"));
        assert_eq!(result.errors[1].unit_id, units[1].id.clone());
        assert_eq!(result.errors[2].unit_id, units[3].id.clone());
        assert!(result.errors[3].message.starts_with("Army exceeds"));
    }

    #[test]
    fn test_missing_fields_are_lenient() {
        let bare = roster_unit_factory(RosterUnitFactoryOptions {
            unit_type: Some(None),
            ..Default::default()
        });
        let result = validate(1000, &[bare]);

        assert!(result.valid);
        assert_eq!(result.total_points, 0);
        assert_eq!(result.current_hero_count, 0);
    }

    #[test]
    fn test_per_unit_cap_uses_base_cost_when_total_missing() {
        let base_only = roster_unit_factory(RosterUnitFactoryOptions {
            base_cost: Some(400),
            ..Default::default()
        });
        let result = validate(1000, std::slice::from_ref(&base_only));

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].unit_id, base_only.id);
    }

    #[test]
    fn test_unit_without_id_reports_null_unit_id() {
        let mut anonymous = unit(400);
        anonymous.id = None;
        let result = validate(1000, &[anonymous]);

        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message.starts_with("Unit "));
        assert_eq!(result.errors[0].unit_id, None);
    }

    #[test]
    fn test_uppercase_hero_is_not_a_hero() {
        let shouting = roster_unit_factory(RosterUnitFactoryOptions {
            unit_type: Some(Some(UnitCategory::Other("Hero".to_string()))),
            total_cost: Some(10),
            ..Default::default()
        });
        let result = validate(100, &[shouting]);

        assert_eq!(result.current_hero_count, 0);
        assert!(result.errors.iter().all(|e| !e.message.contains("heroes")));
    }

    #[test]
    fn test_zero_limit_flags_every_costly_unit() {
        let units = vec![unit(10), unit(0)];
        let result = validate(0, &units);

        assert_eq!(result.max_hero_count, 0);
        // one per-unit error for the 10 pts unit, then the total
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].unit_id, units[0].id.clone());
    }

    #[test]
    fn test_negative_limit_uses_floor_arithmetic() {
        let rules = RosterRules::default();

        assert_eq!(rules.max_heroes(-1), -1);
        assert_eq!(rules.max_unit_cost(-10), -4);

        let result = rules.validate(-10, &[]);
        assert_eq!(result.total_points, 0);
        // 0 heroes is above -1 and 0 pts is above -10
        assert_eq!(result.errors.len(), 2);
        assert!(!result.valid);
    }

    #[test]
    fn test_custom_rules() {
        let rules = RosterRules::new(500, 50);
        let units = vec![hero(100), hero(100), unit(500)];
        let result = rules.validate(1000, &units);

        assert_eq!(result.max_hero_count, 2);
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn test_points_per_hero_is_clamped() {
        let rules = RosterRules::new(0, 35);

        assert_eq!(rules.points_per_hero(), 1);
        assert_eq!(rules.max_heroes(3), 3);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let units = vec![hero(100), hero(100), unit(400)];

        let first = serde_json::to_vec(&validate(500, &units)).unwrap();
        let second = serde_json::to_vec(&validate(500, &units)).unwrap();

        assert_eq!(first, second);
    }
}
