//! Input normalization shared by every entry point into the workspace.
//!
//! Names fall back to a placeholder when blank, progress values are rounded
//! and clamped instead of rejected, and id lists are de-duplicated.

use std::collections::HashSet;

use uuid::Uuid;

pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";
pub const DEFAULT_TASK_NAME: &str = "Untitled Task";
pub const DEFAULT_MEMBER_NAME: &str = "Unnamed";
pub const DEFAULT_CAPACITY: u32 = 4;

pub const MIN_PROGRESS: u8 = 0;
pub const MAX_PROGRESS: u8 = 100;

/// Trimmed name, or `default` when the input is missing or blank.
pub fn name_or_default(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}

/// Trimmed free-text field (role, lead); missing input becomes empty.
pub fn trimmed(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

/// Round half-up and clamp into 0..=100. Non-finite values are dropped.
pub fn normalize_progress(value: f64) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }

    let clamped = value
        .round()
        .clamp(f64::from(MIN_PROGRESS), f64::from(MAX_PROGRESS));
    Some(clamped as u8)
}

/// Parse id strings, dropping malformed entries and duplicates while keeping
/// first-seen order.
pub fn parse_id_set<I, S>(raw: I) -> Vec<Uuid>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|s| parse_optional_id(Some(s.as_ref())))
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Parse an optional id, treating blank or malformed input as absent.
pub fn parse_optional_id(raw: Option<&str>) -> Option<Uuid> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(s).ok())
}
