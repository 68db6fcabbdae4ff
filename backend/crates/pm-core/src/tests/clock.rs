use crate::{Project, Task, TeamMember, clock};

use uuid::Uuid;

#[test]
fn test_now_has_millisecond_precision() {
    let now = clock::now();

    assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
}

#[test]
fn test_new_entities_use_millisecond_timestamps() {
    let project = Project::new("Harbor".to_string());
    let task = Task::new(project.id, "Survey".to_string(), None);
    let member = TeamMember::new("Ava".to_string(), "Designer".to_string());

    for stamp in [
        project.created_at,
        task.created_at,
        member.created_at,
        Task::new(Uuid::new_v4(), "Other".to_string(), None).updated_at,
    ] {
        assert_eq!(stamp.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
