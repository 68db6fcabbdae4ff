//! Progress computation for a project's task set.
//!
//! This is the pure half of progress synchronization: given the tasks that
//! currently belong to a project it decides the new `progress` value and
//! whether the project becomes `Completed`. Persisting the result is the
//! caller's job.

use crate::{ProjectPatch, ProjectStatus, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub progress: u8,
    /// True when the task set is non-empty and the rounded progress reaches 100
    pub completes_project: bool,
}

impl ProgressUpdate {
    /// Project patch for this update. Status is only ever promoted to
    /// `Completed`; a lower progress leaves the stored status alone.
    pub fn to_patch(self) -> ProjectPatch {
        let status = self.completes_project.then_some(ProjectStatus::Completed);
        ProjectPatch::progress(self.progress, status)
    }
}

/// `round(100 * done / total)` with halves rounded up, in integer arithmetic.
/// Returns 0 for an empty set.
pub fn completion_percentage(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let done = done.min(total) as u64;
    let total = total as u64;
    ((200 * done + total) / (2 * total)) as u8
}

pub fn compute_progress(tasks: &[Task]) -> ProgressUpdate {
    let total = tasks.len();
    let done = tasks.iter().filter(|t| t.is_done()).count();
    let progress = completion_percentage(done, total);

    ProgressUpdate {
        progress,
        completes_project: total > 0 && progress == 100,
    }
}
