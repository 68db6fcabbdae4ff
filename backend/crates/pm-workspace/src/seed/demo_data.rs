use pm_core::{Project, ProjectStatus, Task, TaskStatus, TeamMember};

use uuid::Uuid;

pub struct DemoData {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub team_members: Vec<TeamMember>,
}

fn member(name: &str, role: &str, capacity: u32) -> TeamMember {
    let mut member = TeamMember::new(name.to_string(), role.to_string());
    member.capacity = capacity;
    member
}

fn project(
    name: &str,
    status: ProjectStatus,
    progress: u8,
    due_date: &str,
    studio_lead: &str,
) -> Project {
    let mut project = Project::new(name.to_string());
    project.status = status;
    project.progress = progress;
    project.due_date = due_date.to_string();
    project.studio_lead = studio_lead.to_string();
    project
}

fn task(project_id: Uuid, name: &str, completed: bool, assignee_id: Uuid) -> Task {
    let mut task = Task::new(project_id, name.to_string(), Some(assignee_id));
    task.status = if completed {
        TaskStatus::Done
    } else {
        TaskStatus::ToDo
    };
    task
}

/// Fresh ids on every call.
pub fn demo_data() -> DemoData {
    let ava = member("Ava Martin", "Design Lead", 5);
    let ethan = member("Ethan Ward", "Project Architect", 4);
    let sloane = member("Sloane Ali", "Visualization", 3);
    let jules = member("Jules Ferreira", "Permitting", 2);

    let studio_refresh = project(
        "Atelier North Workspace Refresh",
        ProjectStatus::InProgress,
        68,
        "2025-03-14",
        "Ava Martin",
    );
    let gallery_expansion = project(
        "Riverbank Gallery Expansion",
        ProjectStatus::Planning,
        35,
        "2025-05-02",
        "Luca Garcia",
    );
    let campus_housing = project(
        "Redwood Campus Housing",
        ProjectStatus::Completed,
        100,
        "2024-11-20",
        "Mara Chen",
    );

    let tasks = vec![
        task(studio_refresh.id, "Site survey & zoning review", true, ava.id),
        task(studio_refresh.id, "Finish palette + FF&E", false, ethan.id),
        task(gallery_expansion.id, "Concept massing model", false, sloane.id),
        task(campus_housing.id, "Permit close-out package", true, jules.id),
    ];

    DemoData {
        projects: vec![studio_refresh, gallery_expansion, campus_housing],
        tasks,
        team_members: vec![ava, ethan, sloane, jules],
    }
}
