//! Repository for the `missions` table.

use mission_core::mission::like_prefix_pattern;
use mission_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::mission::Mission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, level, reward, completed, active";

/// Provides query operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// List every mission, ordered by id.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query).fetch_all(pool).await
    }

    /// Find a mission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List missions whose name starts with `prefix` (case-sensitive).
    pub async fn find_by_name_prefix(
        pool: &PgPool,
        prefix: &str,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM missions \
             WHERE name LIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(like_prefix_pattern(prefix))
            .fetch_all(pool)
            .await
    }

    /// List missions whose level is at most `level`.
    pub async fn find_by_level_at_most(
        pool: &PgPool,
        level: i32,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE level <= $1 ORDER BY id");
        sqlx::query_as::<_, Mission>(&query)
            .bind(level)
            .fetch_all(pool)
            .await
    }

    /// Insert the mission if it has no id yet, otherwise overwrite the
    /// stored row. Returns the persisted row.
    ///
    /// Updating an id with no row fails with `RowNotFound`.
    pub async fn save(pool: &PgPool, mission: &Mission) -> Result<Mission, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::save_inner(&mut conn, mission).await
    }

    /// Save a batch of missions in a single transaction.
    pub async fn save_all(pool: &PgPool, missions: &[Mission]) -> Result<Vec<Mission>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut saved = Vec::with_capacity(missions.len());
        for mission in missions {
            saved.push(Self::save_inner(&mut tx, mission).await?);
        }

        tx.commit().await?;
        tracing::debug!(count = saved.len(), "Saved mission batch");
        Ok(saved)
    }

    async fn save_inner(conn: &mut PgConnection, mission: &Mission) -> Result<Mission, sqlx::Error> {
        match mission.id {
            None => {
                let query = format!(
                    "INSERT INTO missions (name, description, level, reward, completed, active) \
                     VALUES ($1, $2, $3, $4, $5, $6) \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Mission>(&query)
                    .bind(&mission.name)
                    .bind(&mission.description)
                    .bind(mission.level)
                    .bind(mission.reward)
                    .bind(mission.completed)
                    .bind(mission.active)
                    .fetch_one(&mut *conn)
                    .await
            }
            Some(id) => {
                let query = format!(
                    "UPDATE missions SET \
                        name = $2, \
                        description = $3, \
                        level = $4, \
                        reward = $5, \
                        completed = $6, \
                        active = $7, \
                        updated_at = NOW() \
                     WHERE id = $1 \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Mission>(&query)
                    .bind(id)
                    .bind(&mission.name)
                    .bind(&mission.description)
                    .bind(mission.level)
                    .bind(mission.reward)
                    .bind(mission.completed)
                    .bind(mission.active)
                    .fetch_one(&mut *conn)
                    .await
            }
        }
    }
}
