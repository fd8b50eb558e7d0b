use uuid::Uuid;

use armyforge_game::models::{army::Army, faction::Faction};

use crate::cqrs::Query;

pub struct ListArmies;

impl Query for ListArmies {
    type Output = Vec<Army>;
}

pub struct GetArmyById {
    pub id: Uuid,
}

impl Query for GetArmyById {
    type Output = Army;
}

/// All factions, or only those whose `game` matches exactly.
pub struct ListFactions {
    pub game: Option<String>,
}

impl Query for ListFactions {
    type Output = Vec<Faction>;
}

pub struct GetFactionById {
    pub id: Uuid,
}

impl Query for GetFactionById {
    type Output = Faction;
}
