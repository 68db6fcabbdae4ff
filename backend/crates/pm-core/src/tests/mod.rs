mod clock;
mod models;
mod normalize;

use crate::{Task, TaskStatus};

use uuid::Uuid;

pub(crate) fn tasks_with_statuses(project_id: Uuid, statuses: &[TaskStatus]) -> Vec<Task> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let mut task = Task::new(project_id, format!("Task {}", i + 1), None);
            task.status = *status;
            task
        })
        .collect()
}
