use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use armyforge_types::roster::RosterUnit;

use crate::points::army_points;

/// A user-built roster for one game and faction.
///
/// `total_points` is derived from `units` and is only ever set by the
/// constructors in this module. Entries given without an id get one when the
/// army is created or its roster replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Army {
    pub id: Uuid,
    pub name: String,
    pub game: String,
    pub faction: String,
    pub points_limit: i64,
    units: Vec<RosterUnit>,
    total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of an army. `None` fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ArmyChanges {
    pub name: Option<String>,
    pub points_limit: Option<i64>,
    pub units: Option<Vec<RosterUnit>>,
}

impl Army {
    pub fn new(
        id: Uuid,
        name: String,
        game: String,
        faction: String,
        points_limit: i64,
        mut units: Vec<RosterUnit>,
    ) -> Self {
        units.iter_mut().for_each(RosterUnit::ensure_id);
        let now = Utc::now();
        Self {
            id,
            name,
            game,
            faction,
            points_limit,
            total_points: army_points(&units),
            units,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds an army from storage, recomputing its points.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        name: String,
        game: String,
        faction: String,
        points_limit: i64,
        units: Vec<RosterUnit>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            game,
            faction,
            points_limit,
            total_points: army_points(&units),
            units,
            created_at,
            updated_at,
        }
    }

    pub fn units(&self) -> &[RosterUnit] {
        &self.units
    }

    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    /// Replaces the roster and recomputes its points.
    pub fn set_units(&mut self, mut units: Vec<RosterUnit>) {
        units.iter_mut().for_each(RosterUnit::ensure_id);
        self.total_points = army_points(&units);
        self.units = units;
    }

    /// Applies a partial update and bumps `updated_at`.
    pub fn apply(&mut self, changes: ArmyChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(points_limit) = changes.points_limit {
            self.points_limit = points_limit;
        }
        if let Some(units) = changes.units {
            self.set_units(units);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ArmyFactoryOptions, army_factory, hero, unit};

    #[test]
    fn test_new_army_computes_points() {
        let army = army_factory(ArmyFactoryOptions {
            units: Some(vec![hero(115), unit(95)]),
            ..Default::default()
        });

        assert_eq!(army.total_points(), 210);
        assert_eq!(army.created_at, army.updated_at);
    }

    #[test]
    fn test_restore_recomputes_points() {
        let army = Army::restore(
            Uuid::new_v4(),
            "Warband".to_string(),
            "Age of Fantasy".to_string(),
            "Disciples de la Guerre".to_string(),
            1000,
            vec![unit(80)],
            Utc::now(),
            Utc::now(),
        );

        assert_eq!(army.total_points(), 80);
    }

    #[test]
    fn test_apply_units_recomputes_points() {
        let mut army = army_factory(ArmyFactoryOptions {
            units: Some(vec![unit(95)]),
            ..Default::default()
        });
        let before = army.updated_at;

        army.apply(ArmyChanges {
            units: Some(vec![unit(95), unit(80), hero(65)]),
            ..Default::default()
        });

        assert_eq!(army.total_points(), 240);
        assert_eq!(army.units().len(), 3);
        assert!(army.updated_at >= before);
    }

    #[test]
    fn test_units_without_id_get_one() {
        let mut anonymous = unit(50);
        anonymous.id = None;
        let named = unit(60);

        let mut army = army_factory(ArmyFactoryOptions {
            units: Some(vec![anonymous.clone(), named.clone()]),
            ..Default::default()
        });

        assert!(army.units()[0].id.is_some());
        assert_eq!(army.units()[1].id, named.id);

        army.apply(ArmyChanges {
            units: Some(vec![anonymous]),
            ..Default::default()
        });

        assert!(army.units()[0].id.is_some());
    }

    #[test]
    fn test_apply_without_units_keeps_roster() {
        let mut army = army_factory(ArmyFactoryOptions {
            units: Some(vec![unit(95)]),
            points_limit: Some(1000),
            ..Default::default()
        });

        army.apply(ArmyChanges {
            name: Some("Horde".to_string()),
            points_limit: Some(1500),
            units: None,
        });

        assert_eq!(army.name, "Horde");
        assert_eq!(army.points_limit, 1500);
        assert_eq!(army.total_points(), 95);
    }

    #[test]
    fn test_serialized_army_exposes_total_points() {
        let army = army_factory(ArmyFactoryOptions {
            units: Some(vec![unit(70)]),
            ..Default::default()
        });
        let value = serde_json::to_value(&army).unwrap();

        assert_eq!(value["total_points"], 70);
        assert_eq!(value["units"].as_array().map(Vec::len), Some(1));
    }
}
