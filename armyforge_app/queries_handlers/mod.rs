mod get_army_by_id;
mod get_faction_by_id;
mod list_armies;
mod list_factions;

pub use get_army_by_id::GetArmyByIdHandler;
pub use get_faction_by_id::GetFactionByIdHandler;
pub use list_armies::ListArmiesHandler;
pub use list_factions::ListFactionsHandler;
