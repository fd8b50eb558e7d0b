mod create_army;
mod create_faction;
mod delete_army;
mod delete_faction;
mod helpers;
mod import_faction;
mod seed_catalog;
mod update_army;
mod upload_faction;

pub use create_army::CreateArmyCommandHandler;
pub use create_faction::CreateFactionCommandHandler;
pub use delete_army::DeleteArmyCommandHandler;
pub use delete_faction::DeleteFactionCommandHandler;
pub use import_faction::ImportFactionCommandHandler;
pub use seed_catalog::SeedCatalogCommandHandler;
pub use update_army::UpdateArmyCommandHandler;
pub use upload_faction::UploadFactionCommandHandler;
