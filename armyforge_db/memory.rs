//! Process-local store used when no database is configured.
//!
//! A unit of work holds the store lock for its whole lifetime and works on a
//! copy of the data, which is written back only on commit. Units of work are
//! therefore serialized.

use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use armyforge_app::{
    repository::{ArmyRepository, FactionRepository},
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use armyforge_game::models::{army::Army, faction::Faction};
use armyforge_types::errors::{ApplicationError, DbError};

#[derive(Debug, Default, Clone)]
struct StoreState {
    armies: HashMap<Uuid, Army>,
    /// Insertion order is listing order.
    factions: Vec<Faction>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryUnitOfWorkProvider {
    store: Arc<Mutex<StoreState>>,
}

impl InMemoryUnitOfWorkProvider {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let guard = self.store.clone().lock_owned().await;
        let working = Arc::new(Mutex::new((*guard).clone()));

        Ok(Box::new(InMemoryUnitOfWork { guard, working }))
    }
}

pub struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<StoreState>,
    working: Arc<Mutex<StoreState>>,
}

#[async_trait]
impl<'a> UnitOfWork<'a> for InMemoryUnitOfWork {
    fn armies(&self) -> Arc<dyn ArmyRepository + 'a> {
        Arc::new(InMemoryArmyRepository {
            state: self.working.clone(),
        })
    }

    fn factions(&self) -> Arc<dyn FactionRepository + 'a> {
        Arc::new(InMemoryFactionRepository {
            state: self.working.clone(),
        })
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        let InMemoryUnitOfWork { mut guard, working } = *self;
        *guard = std::mem::take(&mut *working.lock().await);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        Ok(())
    }
}

struct InMemoryArmyRepository {
    state: Arc<Mutex<StoreState>>,
}

#[async_trait]
impl ArmyRepository for InMemoryArmyRepository {
    async fn list(&self) -> Result<Vec<Army>, ApplicationError> {
        let state = self.state.lock().await;
        let mut armies: Vec<Army> = state.armies.values().cloned().collect();
        armies.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(armies)
    }

    async fn get_by_id(&self, army_id: Uuid) -> Result<Army, ApplicationError> {
        let state = self.state.lock().await;
        state
            .armies
            .get(&army_id)
            .cloned()
            .ok_or_else(|| ApplicationError::Db(DbError::ArmyNotFound(army_id.to_string())))
    }

    async fn save(&self, army: &Army) -> Result<(), ApplicationError> {
        let mut state = self.state.lock().await;
        state.armies.insert(army.id, army.clone());
        Ok(())
    }

    async fn remove(&self, army_id: Uuid) -> Result<(), ApplicationError> {
        let mut state = self.state.lock().await;
        state
            .armies
            .remove(&army_id)
            .map(|_| ())
            .ok_or_else(|| ApplicationError::Db(DbError::ArmyNotFound(army_id.to_string())))
    }
}

struct InMemoryFactionRepository {
    state: Arc<Mutex<StoreState>>,
}

#[async_trait]
impl FactionRepository for InMemoryFactionRepository {
    async fn list(&self, game: Option<&str>) -> Result<Vec<Faction>, ApplicationError> {
        let state = self.state.lock().await;
        Ok(state
            .factions
            .iter()
            .filter(|f| game.is_none_or(|g| f.game() == g))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, faction_id: Uuid) -> Result<Faction, ApplicationError> {
        let state = self.state.lock().await;
        state
            .factions
            .iter()
            .find(|f| f.id == faction_id)
            .cloned()
            .ok_or_else(|| ApplicationError::Db(DbError::FactionNotFound(faction_id.to_string())))
    }

    async fn find_by_name(
        &self,
        faction: &str,
        game: &str,
    ) -> Result<Option<Faction>, ApplicationError> {
        let state = self.state.lock().await;
        Ok(state
            .factions
            .iter()
            .find(|f| f.name() == faction && f.game() == game)
            .cloned())
    }

    async fn save(&self, faction: &Faction) -> Result<(), ApplicationError> {
        let mut state = self.state.lock().await;
        match state.factions.iter_mut().find(|f| f.id == faction.id) {
            Some(existing) => *existing = faction.clone(),
            None => state.factions.push(faction.clone()),
        }
        Ok(())
    }

    async fn remove(&self, faction_id: Uuid) -> Result<(), ApplicationError> {
        let mut state = self.state.lock().await;
        let position = state
            .factions
            .iter()
            .position(|f| f.id == faction_id)
            .ok_or_else(|| {
                ApplicationError::Db(DbError::FactionNotFound(faction_id.to_string()))
            })?;
        state.factions.remove(position);
        Ok(())
    }
}
