use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A list query matched no rows.
    #[error("No {entity} records matched")]
    NoMatches { entity: &'static str },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether this error represents a missing record or an empty result set.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoMatches { .. })
    }
}
