use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Planning.as_str(), "Planning");
    assert_eq!(ProjectStatus::InProgress.as_str(), "In Progress");
    assert_eq!(ProjectStatus::OnHold.as_str(), "On Hold");
    assert_eq!(ProjectStatus::Completed.as_str(), "Completed");
}

#[test]
fn test_project_status_from_str_round_trips_every_variant() {
    for status in [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ] {
        assert_eq!(ProjectStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_project_status_from_str_rejects_unknown() {
    assert!(ProjectStatus::from_str("Archived").is_err());
    assert!(ProjectStatus::from_str("planning").is_err());
    assert!(ProjectStatus::from_str("").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Planning);
}
