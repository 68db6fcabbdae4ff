use crate::TaskStatus;
use crate::clock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    // Owning project, fixed at creation
    pub project_id: Uuid,

    pub name: String,
    pub status: TaskStatus,

    // Weak reference; the member may no longer exist
    pub assignee_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(project_id: Uuid, name: String, assignee_id: Option<Uuid>) -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            status: TaskStatus::initial(assignee_id.is_some()),
            assignee_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}
