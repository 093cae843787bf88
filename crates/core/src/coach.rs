//! Coach identifier validation.
//!
//! Older frontend builds requested OAuth URLs without a coach id, or with
//! the literal placeholder `default`, which produced authorization URLs
//! whose `state` could not be mapped back to a coach on callback. Both
//! forms are rejected before any URL is constructed.

/// Placeholder sentinel sent by frontend builds that never resolved the
/// real coach id. Treated the same as a missing parameter.
pub const PLACEHOLDER_COACH_ID: &str = "default";

/// Whether `id` is usable as an OAuth `state` value that can be mapped
/// back to a coach: non-empty after trimming and not the placeholder.
pub fn is_valid_coach_id(id: &str) -> bool {
    let trimmed = id.trim();
    !trimmed.is_empty() && trimmed != PLACEHOLDER_COACH_ID
}
