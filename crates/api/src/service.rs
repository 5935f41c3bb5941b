//! Mission operations service.
//!
//! Business rules on top of a [`MissionStore`]: empty results and missing
//! records become not-found errors, status transitions are applied here and
//! persisted through the store.

use std::sync::Arc;

use mission_core::error::CoreError;
use mission_core::mission::MISSION_ENTITY;
use mission_core::types::DbId;
use mission_db::models::mission::{CreateMission, Mission};
use mission_db::store::MissionStore;

use crate::error::AppResult;

pub struct MissionService {
    store: Arc<dyn MissionStore>,
}

impl MissionService {
    pub fn new(store: Arc<dyn MissionStore>) -> Self {
        Self { store }
    }

    /// Whether the backing store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await
    }

    /// Every mission. Fails with not-found when there are none.
    pub async fn list_all(&self) -> AppResult<Vec<Mission>> {
        non_empty(self.store.find_all().await?)
    }

    /// Missions whose name starts with `prefix`.
    pub async fn list_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<Mission>> {
        let missions = self.store.find_by_name_prefix(prefix).await?;
        tracing::debug!(prefix, count = missions.len(), "Name prefix search");
        non_empty(missions)
    }

    /// Missions with a level at most `level`.
    pub async fn list_by_level_at_most(&self, level: i32) -> AppResult<Vec<Mission>> {
        let missions = self.store.find_by_level_at_most(level).await?;
        tracing::debug!(level, count = missions.len(), "Level threshold search");
        non_empty(missions)
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<Mission> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_reward(&self, id: DbId) -> AppResult<i32> {
        Ok(self.get_by_id(id).await?.reward)
    }

    /// Persist a new mission with default status flags.
    pub async fn create(&self, input: CreateMission) -> AppResult<Mission> {
        let mission = self.store.save(&Mission::new(input)).await?;
        tracing::info!(mission_id = ?mission.id, name = %mission.name, "Mission created");
        Ok(mission)
    }

    pub async fn mark_completed(&self, id: DbId) -> AppResult<Mission> {
        self.update(id, Mission::mark_completed).await
    }

    /// Soft delete: the mission stays stored with `active = false`.
    pub async fn mark_inactive(&self, id: DbId) -> AppResult<Mission> {
        self.update(id, Mission::mark_inactive).await
    }

    /// Reset every mission to `completed = false`, `active = true`.
    ///
    /// Succeeds on an empty store. Missions created after the initial read
    /// are not touched. Returns the number of missions reset.
    pub async fn reset_all(&self) -> AppResult<usize> {
        let mut missions = self.store.find_all().await?;
        for mission in &mut missions {
            mission.reset();
        }
        let saved = self.store.save_all(&missions).await?;
        tracing::info!(count = saved.len(), "Missions reset");
        Ok(saved.len())
    }

    async fn update(&self, id: DbId, apply: fn(&mut Mission)) -> AppResult<Mission> {
        let mut mission = self.get_by_id(id).await?;
        apply(&mut mission);
        let mission = self.store.save(&mission).await?;
        tracing::info!(
            mission_id = id,
            completed = mission.completed,
            active = mission.active,
            "Mission status updated"
        );
        Ok(mission)
    }
}

fn not_found(id: DbId) -> crate::error::AppError {
    CoreError::NotFound {
        entity: MISSION_ENTITY,
        id,
    }
    .into()
}

fn non_empty(missions: Vec<Mission>) -> AppResult<Vec<Mission>> {
    if missions.is_empty() {
        return Err(CoreError::NoMatches {
            entity: MISSION_ENTITY,
        }
        .into());
    }
    Ok(missions)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use mission_db::store::InMemoryMissionStore;

    use super::*;
    use crate::error::AppError;

    fn service() -> MissionService {
        MissionService::new(Arc::new(InMemoryMissionStore::new()))
    }

    fn input(name: &str, level: i32, reward: i32) -> CreateMission {
        CreateMission {
            name: name.to_string(),
            description: format!("{name} briefing"),
            level,
            reward,
        }
    }

    async fn create_id(service: &MissionService, name: &str, level: i32) -> DbId {
        service
            .create(input(name, level, level * 10))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    #[tokio::test]
    async fn create_applies_defaults_and_assigns_id() {
        let service = service();
        let mission = service
            .create(input("Rescue", 3, 100))
            .await
            .unwrap();

        assert_eq!(mission.id, Some(1));
        assert!(!mission.completed);
        assert!(mission.active);
    }

    #[tokio::test]
    async fn get_by_id_returns_created_fields() {
        let service = service();
        let created = service.create(input("Rescue", 3, 100)).await.unwrap();
        let fetched = service.get_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let err = service().get_by_id(7).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { id: 7, .. }));
    }

    #[tokio::test]
    async fn get_reward_returns_reward() {
        let service = service();
        let id = service
            .create(input("Rescue", 3, 100))
            .await
            .unwrap()
            .id
            .unwrap();
        assert_eq!(service.get_reward(id).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn get_reward_missing_is_not_found() {
        let err = service().get_reward(1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_all_empty_is_not_found() {
        let err = service().list_all().await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NoMatches { .. }));
    }

    #[tokio::test]
    async fn list_by_name_prefix_filters() {
        let service = service();
        create_id(&service, "Rescue", 1).await;
        create_id(&service, "Recon", 2).await;

        let found = service.list_by_name_prefix("Resc").await.unwrap();
        assert_eq!(found.len(), 1);

        let exact = service.list_by_name_prefix("Recon").await.unwrap();
        assert_eq!(exact[0].name, "Recon");

        let err = service.list_by_name_prefix("Zulu").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_by_level_at_most_includes_boundary_only() {
        let service = service();
        for level in [1, 2, 3, 4, 5] {
            create_id(&service, &format!("L{level}"), level).await;
        }

        let found = service.list_by_level_at_most(3).await.unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|m| m.level <= 3));

        let err = service.list_by_level_at_most(0).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn mark_completed_is_idempotent() {
        let service = service();
        let id = create_id(&service, "Rescue", 3).await;

        let first = service.mark_completed(id).await.unwrap();
        let second = service.mark_completed(id).await.unwrap();
        assert!(first.completed);
        assert!(second.completed);
        assert!(second.active);
    }

    #[tokio::test]
    async fn mark_inactive_is_idempotent() {
        let service = service();
        let id = create_id(&service, "Rescue", 3).await;

        let first = service.mark_inactive(id).await.unwrap();
        let second = service.mark_inactive(id).await.unwrap();
        assert!(!first.active);
        assert!(!second.active);
        assert!(!second.completed);
    }

    #[tokio::test]
    async fn status_updates_on_missing_id_are_not_found() {
        let service = service();
        assert!(service.mark_completed(3).await.unwrap_err().is_not_found());
        assert!(service.mark_inactive(3).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn reset_all_restores_every_mission() {
        let service = service();
        let a = create_id(&service, "Alpha", 1).await;
        let b = create_id(&service, "Bravo", 2).await;
        service.mark_completed(a).await.unwrap();
        service.mark_inactive(b).await.unwrap();

        assert_eq!(service.reset_all().await.unwrap(), 2);

        let all = service.list_all().await.unwrap();
        assert!(all.iter().all(|m| !m.completed && m.active));
    }

    // Unlike the list operations, reset never reports not-found.
    #[tokio::test]
    async fn reset_all_on_empty_store_succeeds() {
        assert_eq!(service().reset_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rescue_walkthrough() {
        let service = service();
        let created = service.create(input("Rescue", 3, 100)).await.unwrap();
        let id = created.id.unwrap();

        assert_eq!(service.get_reward(id).await.unwrap(), 100);
        assert!(service.mark_completed(id).await.unwrap().completed);

        service.reset_all().await.unwrap();
        let after = service.get_by_id(id).await.unwrap();
        assert!(!after.completed);
        assert!(after.active);
    }
}
