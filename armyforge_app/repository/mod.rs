mod army_repository;
mod faction_repository;

pub use army_repository::ArmyRepository;
pub use faction_repository::FactionRepository;
