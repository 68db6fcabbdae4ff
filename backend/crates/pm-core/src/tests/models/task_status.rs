use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_from_str() {
    assert_eq!(TaskStatus::from_str("To Do").unwrap(), TaskStatus::ToDo);
    assert_eq!(TaskStatus::from_str("Assigned").unwrap(), TaskStatus::Assigned);
    assert_eq!(
        TaskStatus::from_str("In Progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("Done").unwrap(), TaskStatus::Done);
    assert!(TaskStatus::from_str("Blocked").is_err());
}

#[test]
fn test_task_status_initial() {
    assert_eq!(TaskStatus::initial(true), TaskStatus::Assigned);
    assert_eq!(TaskStatus::initial(false), TaskStatus::ToDo);
}

#[test]
fn test_only_done_counts_as_done() {
    assert!(TaskStatus::Done.is_done());
    assert!(!TaskStatus::ToDo.is_done());
    assert!(!TaskStatus::Assigned.is_done());
    assert!(!TaskStatus::InProgress.is_done());
}
