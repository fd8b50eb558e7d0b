mod army_handler;
mod faction_handler;
mod game_handler;
mod helpers;
mod home_handler;
mod validate_handler;

pub use army_handler::{create_army, delete_army, get_army, list_armies, update_army};
pub use faction_handler::{
    create_faction, delete_faction, get_faction, import_faction, list_factions, upload_faction,
};
pub use game_handler::{get_game, list_games};
pub use home_handler::{health, root};
pub use validate_handler::validate_army;
