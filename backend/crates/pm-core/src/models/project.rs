//! Project entity - a unit of studio work whose progress is derived from its tasks.

use crate::ProjectStatus;
use crate::clock;
use crate::normalize::DEFAULT_PROJECT_NAME;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project owns its tasks (cascade delete) and references team members weakly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    /// Completion percentage, always within 0..=100
    pub progress: u8,
    /// Opaque date token as entered by the client (e.g. "2025-03-14")
    pub due_date: String,
    pub studio_lead: String,
    /// Team member ids; may dangle after a member is deleted
    pub team: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with default values
    pub fn new(name: String) -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            name,
            status: ProjectStatus::default(),
            progress: 0,
            due_date: String::new(),
            studio_lead: String::new(),
            team: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

}

impl Default for Project {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME.to_string())
    }
}
