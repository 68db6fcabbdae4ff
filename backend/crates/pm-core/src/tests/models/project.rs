use crate::{Project, ProjectStatus};

#[test]
fn test_project_new() {
    let project = Project::new("Riverbank Gallery".to_string());

    assert_eq!(project.name, "Riverbank Gallery");
    assert_eq!(project.status, ProjectStatus::Planning);
    assert_eq!(project.progress, 0);
    assert_eq!(project.due_date, "");
    assert_eq!(project.studio_lead, "");
    assert!(project.team.is_empty());
    assert_eq!(project.created_at, project.updated_at);
}

#[test]
fn test_project_default_uses_placeholder_name() {
    let project = Project::default();

    assert_eq!(project.name, "Untitled Project");
}
