#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    use uuid::Uuid;

    use armyforge_game::models::{army::Army, faction::Faction};
    use armyforge_types::errors::{ApplicationError, DbError};

    use crate::{
        repository::{ArmyRepository, FactionRepository},
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    #[derive(Default, Clone)]
    pub struct MockArmyRepository {
        armies: Arc<Mutex<HashMap<Uuid, Army>>>,
    }

    impl MockArmyRepository {
        pub fn add_army(&self, army: Army) {
            self.armies.lock().unwrap().insert(army.id, army);
        }
    }

    #[async_trait]
    impl ArmyRepository for MockArmyRepository {
        async fn list(&self) -> Result<Vec<Army>, ApplicationError> {
            let mut armies: Vec<Army> = self.armies.lock().unwrap().values().cloned().collect();
            armies.sort_by_key(|a| a.created_at);
            Ok(armies)
        }

        async fn get_by_id(&self, army_id: Uuid) -> Result<Army, ApplicationError> {
            let armies = self.armies.lock().unwrap();
            Ok(armies
                .get(&army_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::ArmyNotFound(army_id.to_string())))?)
        }

        async fn save(&self, army: &Army) -> Result<(), ApplicationError> {
            self.armies.lock().unwrap().insert(army.id, army.clone());
            Ok(())
        }

        async fn remove(&self, army_id: Uuid) -> Result<(), ApplicationError> {
            self.armies
                .lock()
                .unwrap()
                .remove(&army_id)
                .map(|_| ())
                .ok_or_else(|| ApplicationError::Db(DbError::ArmyNotFound(army_id.to_string())))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockFactionRepository {
        factions: Arc<Mutex<Vec<Faction>>>,
    }

    impl MockFactionRepository {
        pub fn add_faction(&self, faction: Faction) {
            self.factions.lock().unwrap().push(faction);
        }
    }

    #[async_trait]
    impl FactionRepository for MockFactionRepository {
        async fn list(&self, game: Option<&str>) -> Result<Vec<Faction>, ApplicationError> {
            let factions = self.factions.lock().unwrap();
            Ok(factions
                .iter()
                .filter(|f| game.is_none_or(|g| f.game() == g))
                .cloned()
                .collect())
        }

        async fn get_by_id(&self, faction_id: Uuid) -> Result<Faction, ApplicationError> {
            let factions = self.factions.lock().unwrap();
            Ok(factions
                .iter()
                .find(|f| f.id == faction_id)
                .cloned()
                .ok_or_else(|| {
                    ApplicationError::Db(DbError::FactionNotFound(faction_id.to_string()))
                })?)
        }

        async fn find_by_name(
            &self,
            faction: &str,
            game: &str,
        ) -> Result<Option<Faction>, ApplicationError> {
            let factions = self.factions.lock().unwrap();
            Ok(factions
                .iter()
                .find(|f| f.name() == faction && f.game() == game)
                .cloned())
        }

        async fn save(&self, faction: &Faction) -> Result<(), ApplicationError> {
            let mut factions = self.factions.lock().unwrap();
            match factions.iter_mut().find(|f| f.id == faction.id) {
                Some(existing) => *existing = faction.clone(),
                None => factions.push(faction.clone()),
            }
            Ok(())
        }

        async fn remove(&self, faction_id: Uuid) -> Result<(), ApplicationError> {
            let mut factions = self.factions.lock().unwrap();
            let before = factions.len();
            factions.retain(|f| f.id != faction_id);
            if factions.len() == before {
                return Err(ApplicationError::Db(DbError::FactionNotFound(
                    faction_id.to_string(),
                )));
            }
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        armies: Arc<MockArmyRepository>,
        factions: Arc<MockFactionRepository>,

        // Flags to check if commit/rollback was called
        committed: Arc<Mutex<bool>>,
        rolled_back: Arc<Mutex<bool>>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn mock_armies(&self) -> Arc<MockArmyRepository> {
            self.armies.clone()
        }

        pub fn mock_factions(&self) -> Arc<MockFactionRepository> {
            self.factions.clone()
        }

        pub fn committed(&self) -> bool {
            *self.committed.lock().unwrap()
        }

        pub fn rolled_back(&self) -> bool {
            *self.rolled_back.lock().unwrap()
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn armies(&self) -> Arc<dyn ArmyRepository + 'a> {
            self.armies.clone()
        }

        fn factions(&self) -> Arc<dyn FactionRepository + 'a> {
            self.factions.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.committed.lock().unwrap() = true;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.rolled_back.lock().unwrap() = true;
            Ok(())
        }
    }

    /// Hands out clones of one shared [`MockUnitOfWork`], so state and
    /// commit/rollback flags survive across transactions.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        uow: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn uow(&self) -> &MockUnitOfWork {
            &self.uow
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(self.uow.clone());
            Ok(uow)
        }
    }
}
