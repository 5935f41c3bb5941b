//! PostgreSQL-backed mission store.

use async_trait::async_trait;
use mission_core::types::DbId;

use super::MissionStore;
use crate::models::mission::Mission;
use crate::repositories::MissionRepo;
use crate::DbPool;

#[derive(Clone)]
pub struct PgMissionStore {
    pool: DbPool,
}

impl PgMissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionStore for PgMissionStore {
    async fn find_all(&self) -> Result<Vec<Mission>, sqlx::Error> {
        MissionRepo::find_all(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        MissionRepo::find_by_id(&self.pool, id).await
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Mission>, sqlx::Error> {
        MissionRepo::find_by_name_prefix(&self.pool, prefix).await
    }

    async fn find_by_level_at_most(&self, level: i32) -> Result<Vec<Mission>, sqlx::Error> {
        MissionRepo::find_by_level_at_most(&self.pool, level).await
    }

    async fn save(&self, mission: &Mission) -> Result<Mission, sqlx::Error> {
        MissionRepo::save(&self.pool, mission).await
    }

    async fn save_all(&self, missions: &[Mission]) -> Result<Vec<Mission>, sqlx::Error> {
        MissionRepo::save_all(&self.pool, missions).await
    }

    async fn ping(&self) -> bool {
        crate::health_check(&self.pool).await.is_ok()
    }
}
