use crate::{Task, TaskStatus};

use uuid::Uuid;

#[test]
fn test_task_with_assignee_starts_assigned() {
    let task = Task::new(Uuid::new_v4(), "Survey".to_string(), Some(Uuid::new_v4()));

    assert_eq!(task.status, TaskStatus::Assigned);
    assert!(task.assignee_id.is_some());
}

#[test]
fn test_task_without_assignee_starts_to_do() {
    let project_id = Uuid::new_v4();
    let task = Task::new(project_id, "Survey".to_string(), None);

    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.project_id, project_id);
    assert_eq!(task.assignee_id, None);
    assert!(!task.is_done());
}
