//! Mission storage abstraction with pluggable backends.
//!
//! Supports:
//! - `postgres`: the `missions` table via [`MissionRepo`](crate::repositories::MissionRepo)
//! - `memory`: in-process map (non-persistent, for tests and local runs)

mod memory;
mod postgres;

pub use memory::InMemoryMissionStore;
pub use postgres::PgMissionStore;

use async_trait::async_trait;
use mission_core::types::DbId;

use crate::models::mission::Mission;

/// Data access for missions. No validation happens at this level.
#[async_trait]
pub trait MissionStore: Send + Sync {
    /// Every stored mission, ordered by id.
    async fn find_all(&self) -> Result<Vec<Mission>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Mission>, sqlx::Error>;

    /// Missions whose name starts with `prefix`, case-sensitive.
    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Mission>, sqlx::Error>;

    /// Missions with `level <= level`.
    async fn find_by_level_at_most(&self, level: i32) -> Result<Vec<Mission>, sqlx::Error>;

    /// Insert when `mission.id` is `None`, update otherwise.
    async fn save(&self, mission: &Mission) -> Result<Mission, sqlx::Error>;

    async fn save_all(&self, missions: &[Mission]) -> Result<Vec<Mission>, sqlx::Error>;

    /// Whether the backing store is reachable.
    async fn ping(&self) -> bool;
}
