pub mod clock;
pub mod error;
pub mod models;
pub mod normalize;
pub mod progress;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::project::Project;
pub use models::project_patch::ProjectPatch;
pub use models::project_status::ProjectStatus;
pub use models::task::Task;
pub use models::task_patch::TaskPatch;
pub use models::task_status::TaskStatus;
pub use models::team_member::TeamMember;
pub use models::team_member_patch::TeamMemberPatch;
pub use progress::{ProgressUpdate, completion_percentage, compute_progress};
