use rand::Rng;
use uuid::Uuid;

use armyforge_types::{
    catalog::FactionData,
    roster::{RosterUnit, UnitCategory},
};

use crate::models::{army::Army, faction::Faction};

#[derive(Default, Clone)]
pub struct RosterUnitFactoryOptions<'a> {
    pub id: Option<&'a str>,
    pub unit_name: Option<&'a str>,
    /// `Some(None)` leaves the category out entirely.
    pub unit_type: Option<Option<UnitCategory>>,
    pub base_cost: Option<i64>,
    pub total_cost: Option<i64>,
}

#[derive(Default, Clone)]
pub struct ArmyFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub name: Option<&'a str>,
    pub game: Option<&'a str>,
    pub faction: Option<&'a str>,
    pub points_limit: Option<i64>,
    pub units: Option<Vec<RosterUnit>>,
}

#[derive(Default, Clone)]
pub struct FactionFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub faction: Option<&'a str>,
    pub game: Option<&'a str>,
}

pub fn roster_unit_factory(options: RosterUnitFactoryOptions) -> RosterUnit {
    let default_name = format!("unit_{}", rand::thread_rng().r#gen::<u32>());
    RosterUnit {
        id: Some(
            options
                .id
                .map_or_else(|| Uuid::new_v4().to_string(), |s| s.to_string()),
        ),
        unit_name: options.unit_name.map_or(default_name, |s| s.to_string()),
        unit_type: options.unit_type.unwrap_or(Some(UnitCategory::Unit)),
        base_cost: options.base_cost,
        selected_upgrades: vec![],
        combined_unit: false,
        total_cost: options.total_cost,
    }
}

/// A hero entry whose base and total cost are both `cost`.
pub fn hero(cost: i64) -> RosterUnit {
    roster_unit_factory(RosterUnitFactoryOptions {
        unit_type: Some(Some(UnitCategory::Hero)),
        base_cost: Some(cost),
        total_cost: Some(cost),
        ..Default::default()
    })
}

/// A non-hero entry whose base and total cost are both `cost`.
pub fn unit(cost: i64) -> RosterUnit {
    roster_unit_factory(RosterUnitFactoryOptions {
        base_cost: Some(cost),
        total_cost: Some(cost),
        ..Default::default()
    })
}

pub fn army_factory(options: ArmyFactoryOptions) -> Army {
    let default_name = format!("army_{}", rand::thread_rng().r#gen::<u32>());
    Army::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.name.map_or(default_name, |s| s.to_string()),
        options.game.unwrap_or("Age of Fantasy").to_string(),
        options.faction.unwrap_or("Disciples de la Guerre").to_string(),
        options.points_limit.unwrap_or(1000),
        options.units.unwrap_or_default(),
    )
}

pub fn faction_data_factory(faction: &str, game: &str) -> FactionData {
    FactionData {
        faction: faction.to_string(),
        game: game.to_string(),
        version: String::new(),
        status: "complete".to_string(),
        description: String::new(),
        special_rules_descriptions: Default::default(),
        spells: Default::default(),
        units: vec![],
    }
}

pub fn faction_factory(options: FactionFactoryOptions) -> Faction {
    let default_name = format!("faction_{}", rand::thread_rng().r#gen::<u32>());
    Faction::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        faction_data_factory(
            options.faction.unwrap_or(&default_name),
            options.game.unwrap_or("Age of Fantasy"),
        ),
    )
}
