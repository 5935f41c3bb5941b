//! Mission entity model and DTOs.

use mission_core::mission::{DEFAULT_ACTIVE, DEFAULT_COMPLETED};
use mission_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `missions` table.
///
/// `id` is `None` only for a mission that has not been saved yet; every
/// mission returned by a store carries its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Mission {
    pub id: Option<DbId>,
    pub name: String,
    pub description: String,
    pub level: i32,
    pub reward: i32,
    pub completed: bool,
    pub active: bool,
}

impl Mission {
    /// Build an unsaved mission with the creation defaults applied.
    pub fn new(input: CreateMission) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description,
            level: input.level,
            reward: input.reward,
            completed: DEFAULT_COMPLETED,
            active: DEFAULT_ACTIVE,
        }
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Soft delete.
    pub fn mark_inactive(&mut self) {
        self.active = false;
    }

    /// Restore the creation-time status flags.
    pub fn reset(&mut self) {
        self.completed = DEFAULT_COMPLETED;
        self.active = DEFAULT_ACTIVE;
    }
}

/// DTO for creating a new mission.
///
/// Any `id`, `completed` or `active` keys in the request body are ignored.
/// Missing fields fall back to empty strings and zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateMission {
    pub name: String,
    pub description: String,
    pub level: i32,
    pub reward: i32,
}
