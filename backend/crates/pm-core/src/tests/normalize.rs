use crate::normalize::{
    DEFAULT_PROJECT_NAME, name_or_default, normalize_progress, parse_id_set, parse_optional_id,
    trimmed,
};

use uuid::Uuid;

#[test]
fn test_name_or_default() {
    assert_eq!(name_or_default(Some("  Gallery  "), DEFAULT_PROJECT_NAME), "Gallery");
    assert_eq!(name_or_default(Some("   "), DEFAULT_PROJECT_NAME), "Untitled Project");
    assert_eq!(name_or_default(None, DEFAULT_PROJECT_NAME), "Untitled Project");
}

#[test]
fn test_trimmed() {
    assert_eq!(trimmed(Some(" Design Lead ")), "Design Lead");
    assert_eq!(trimmed(None), "");
}

#[test]
fn test_normalize_progress_rounds_and_clamps() {
    assert_eq!(normalize_progress(42.4), Some(42));
    assert_eq!(normalize_progress(42.5), Some(43));
    assert_eq!(normalize_progress(-12.0), Some(0));
    assert_eq!(normalize_progress(250.0), Some(100));
    assert_eq!(normalize_progress(f64::NAN), None);
    assert_eq!(normalize_progress(f64::INFINITY), None);
}

#[test]
fn test_parse_id_set_drops_invalid_and_duplicates() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let raw = vec![
        a.to_string(),
        "not-a-uuid".to_string(),
        b.to_string(),
        a.to_string(),
        String::new(),
    ];

    assert_eq!(parse_id_set(raw), vec![a, b]);
}

#[test]
fn test_parse_optional_id() {
    let id = Uuid::new_v4();

    assert_eq!(parse_optional_id(Some(&id.to_string())), Some(id));
    assert_eq!(parse_optional_id(Some("")), None);
    assert_eq!(parse_optional_id(Some("garbage")), None);
    assert_eq!(parse_optional_id(None), None);
}
