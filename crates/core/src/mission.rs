//! Mission domain constants and query helpers.
//!
//! Shared by the storage layer (prefix patterns, creation defaults) and the
//! HTTP layer (fixed response messages).

/// Entity name used in error values and log fields.
pub const MISSION_ENTITY: &str = "Mission";

/// Body of every 404 response produced by the mission endpoints.
pub const MISSION_NOT_FOUND_MESSAGE: &str = "Mission/s not found";

/// Body of the successful reset response.
pub const MISSIONS_RESET_MESSAGE: &str = "Missions reset";

/// `completed` value for a newly created mission.
pub const DEFAULT_COMPLETED: bool = false;

/// `active` value for a newly created mission.
pub const DEFAULT_ACTIVE: bool = true;

/// Escape character used in `LIKE ... ESCAPE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Build a `LIKE` pattern matching every string that starts with `prefix`.
///
/// Wildcards (`%`, `_`) and the escape character itself are escaped so the
/// prefix is matched literally. Pair with `ESCAPE '\'` in the query.
///
/// # Examples
///
/// ```
/// use mission_core::mission::like_prefix_pattern;
///
/// assert_eq!(like_prefix_pattern("Res"), "Res%");
/// assert_eq!(like_prefix_pattern("50%"), "50\\%%");
/// ```
pub fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
