use crate::{DeleteTaskResponse, SyncProjectResponse, TaskChangeResponse};

use pm_core::Task;
use pm_workspace::{SyncOutcome, TaskChange, TaskRemoval, WorkspaceError};

use uuid::Uuid;

fn failed_sync(project_id: Uuid) -> SyncOutcome {
    let cause = WorkspaceError::validation("database is locked", "progress");
    SyncOutcome::Failed(WorkspaceError::transient_sync_failure(project_id, &cause))
}

#[test]
fn test_task_change_with_failed_sync_carries_warning() {
    let project_id = Uuid::new_v4();
    let task = Task::new(project_id, "Layout pass".to_string(), None);

    let response: TaskChangeResponse = TaskChange {
        task,
        sync: failed_sync(project_id),
    }
    .into();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["task"]["name"], "Layout pass");
    assert_eq!(json["task"]["status"], "To Do");
    assert!(json["project"].is_null());
    assert!(json["warning"].as_str().unwrap().contains("retry"));
}

#[test]
fn test_task_removal_with_failed_sync_carries_warning() {
    let project_id = Uuid::new_v4();
    let task = Task::new(project_id, "Cleanup".to_string(), None);
    let task_id = task.id;

    let response: DeleteTaskResponse = TaskRemoval {
        task,
        sync: failed_sync(project_id),
    }
    .into();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["taskId"], task_id.to_string());
    assert!(json["project"].is_null());
    assert!(json["warning"].is_string());
}

#[test]
fn test_successful_sync_omits_warning() {
    let project = pm_core::Project::new("Stormreach".to_string());

    let response: SyncProjectResponse = SyncOutcome::Synced(project).into();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["project"]["name"], "Stormreach");
    assert!(json.get("warning").is_none());
}
