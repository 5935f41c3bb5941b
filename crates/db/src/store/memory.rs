//! In-memory mission store (non-persistent).

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mission_core::types::DbId;
use tokio::sync::RwLock;

use super::MissionStore;
use crate::models::mission::Mission;

#[derive(Default)]
struct Inner {
    missions: BTreeMap<DbId, Mission>,
    /// Last id handed out. Ids are never reused.
    last_id: DbId,
}

impl Inner {
    fn save(&mut self, mission: &Mission) -> Result<Mission, sqlx::Error> {
        let id = match mission.id {
            Some(id) if self.missions.contains_key(&id) => id,
            Some(_) => return Err(sqlx::Error::RowNotFound),
            None => {
                self.last_id += 1;
                self.last_id
            }
        };
        let saved = Mission {
            id: Some(id),
            ..mission.clone()
        };
        self.missions.insert(id, saved.clone());
        Ok(saved)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryMissionStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryMissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Mission>
    where
        F: Fn(&Mission) -> bool,
    {
        self.inner
            .read()
            .await
            .missions
            .values()
            .filter(|&m| predicate(m))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl MissionStore for InMemoryMissionStore {
    async fn find_all(&self) -> Result<Vec<Mission>, sqlx::Error> {
        Ok(self.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        Ok(self.inner.read().await.missions.get(&id).cloned())
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Mission>, sqlx::Error> {
        Ok(self.filter(|m| m.name.starts_with(prefix)).await)
    }

    async fn find_by_level_at_most(&self, level: i32) -> Result<Vec<Mission>, sqlx::Error> {
        Ok(self.filter(|m| m.level <= level).await)
    }

    async fn save(&self, mission: &Mission) -> Result<Mission, sqlx::Error> {
        self.inner.write().await.save(mission)
    }

    async fn save_all(&self, missions: &[Mission]) -> Result<Vec<Mission>, sqlx::Error> {
        let mut inner = self.inner.write().await;

        // All-or-nothing, like the transactional Postgres variant.
        let unknown = missions
            .iter()
            .filter_map(|m| m.id)
            .any(|id| !inner.missions.contains_key(&id));
        if unknown {
            return Err(sqlx::Error::RowNotFound);
        }

        missions.iter().map(|m| inner.save(m)).collect()
    }

    async fn ping(&self) -> bool {
        true
    }
}
