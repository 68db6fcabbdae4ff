use crate::{UpdateProjectRequest, UpdateTaskRequest};

use pm_workspace::ProjectChanges;

#[test]
fn test_absent_assignee_is_untouched() {
    let req: UpdateTaskRequest = serde_json::from_str(r#"{"name":"Rig"}"#).unwrap();

    assert_eq!(req.assignee_id, None);
}

#[test]
fn test_null_assignee_clears() {
    let req: UpdateTaskRequest = serde_json::from_str(r#"{"assigneeId":null}"#).unwrap();

    assert_eq!(req.assignee_id, Some(None));
}

#[test]
fn test_string_assignee_sets() {
    let req: UpdateTaskRequest = serde_json::from_str(r#"{"assigneeId":"abc"}"#).unwrap();

    assert_eq!(req.assignee_id, Some(Some("abc".to_string())));
}

#[test]
fn test_null_project_name_and_team_reset_to_defaults() {
    let req: UpdateProjectRequest =
        serde_json::from_str(r#"{"name":null,"team":null}"#).unwrap();
    let changes = ProjectChanges::from(req);

    assert_eq!(changes.name, Some(String::new()));
    assert_eq!(changes.team, Some(Vec::new()));
}

#[test]
fn test_absent_project_name_and_team_untouched() {
    let req: UpdateProjectRequest = serde_json::from_str(r#"{"dueDate":"2026-01-01"}"#).unwrap();
    let changes = ProjectChanges::from(req);

    assert_eq!(changes.name, None);
    assert_eq!(changes.team, None);
}
