//! Query parameter types for the mission filter endpoints.

use serde::Deserialize;

/// `?prefijo=` on `GET /mision/nombre`.
#[derive(Debug, Deserialize)]
pub struct NamePrefixParams {
    pub prefijo: String,
}

/// `?nivel=` on `GET /mision/nivel`.
#[derive(Debug, Deserialize)]
pub struct LevelParams {
    pub nivel: i32,
}
