use crate::{
    Project, ProjectPatch, ProjectStatus, Task, TaskPatch, TaskStatus, TeamMember,
    TeamMemberPatch,
};

use uuid::Uuid;

#[test]
fn test_project_patch_only_overwrites_present_fields() {
    let mut project = Project::new("Atelier".to_string());
    project.due_date = "2025-03-14".to_string();
    project.studio_lead = "Ava Martin".to_string();

    let patch = ProjectPatch {
        name: Some("Atelier North".to_string()),
        progress: Some(40),
        ..ProjectPatch::default()
    };
    patch.apply_to(&mut project);

    assert_eq!(project.name, "Atelier North");
    assert_eq!(project.progress, 40);
    assert_eq!(project.due_date, "2025-03-14");
    assert_eq!(project.studio_lead, "Ava Martin");
    assert_eq!(project.status, ProjectStatus::Planning);
}

#[test]
fn test_empty_project_patch_is_noop() {
    let mut project = Project::new("Atelier".to_string());
    let before = project.clone();

    let patch = ProjectPatch::default();
    patch.apply_to(&mut project);

    assert_eq!(project, before);
}

#[test]
fn test_task_patch_distinguishes_clear_from_untouched() {
    let assignee = Uuid::new_v4();
    let mut task = Task::new(Uuid::new_v4(), "Model".to_string(), Some(assignee));

    TaskPatch {
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    }
    .apply_to(&mut task);
    assert_eq!(task.assignee_id, Some(assignee));
    assert_eq!(task.status, TaskStatus::Done);

    TaskPatch {
        assignee_id: Some(None),
        ..TaskPatch::default()
    }
    .apply_to(&mut task);
    assert_eq!(task.assignee_id, None);
}

#[test]
fn test_team_member_patch() {
    let mut member = TeamMember::new("Jules".to_string(), "Permitting".to_string());
    assert_eq!(member.capacity, 4);

    TeamMemberPatch {
        capacity: Some(2),
        ..TeamMemberPatch::default()
    }
    .apply_to(&mut member);

    assert_eq!(member.capacity, 2);
    assert_eq!(member.role, "Permitting");
    assert!(member.is_over_capacity(3));
    assert!(!member.is_over_capacity(2));
}
