//! Demo data for a fresh workspace.

mod demo_data;

pub use demo_data::{DemoData, demo_data};

use crate::Result as WorkspaceErrorResult;

use pm_db::WorkspaceStore;

use log::info;

/// Insert the demo dataset when the store holds no projects, tasks, or team
/// members at all. Returns whether anything was inserted.
///
/// Seeded progress values are stored as given; no sync runs afterwards.
pub async fn seed_if_empty(store: &dyn WorkspaceStore) -> WorkspaceErrorResult<bool> {
    if !store.is_empty().await? {
        info!("Workspace already has data, skipping seed");
        return Ok(false);
    }

    let data = demo_data();
    let counts = (data.projects.len(), data.tasks.len(), data.team_members.len());

    for member in data.team_members {
        store.create_team_member(member).await?;
    }
    for project in data.projects {
        store.create_project(project).await?;
    }
    for task in data.tasks {
        store.create_task(task).await?;
    }

    info!(
        "Seeded workspace: {} project(s), {} task(s), {} team member(s)",
        counts.0, counts.1, counts.2
    );
    Ok(true)
}
