mod army_repository;
mod faction_repository;

pub use army_repository::PostgresArmyRepository;
pub use faction_repository::PostgresFactionRepository;
