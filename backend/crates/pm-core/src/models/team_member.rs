use crate::clock;
use crate::normalize::DEFAULT_CAPACITY;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    /// Maximum concurrent task load (>= 1)
    pub capacity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(name: String, role: String) -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            name,
            role,
            capacity: DEFAULT_CAPACITY,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `assigned_count` tasks exceed this member's capacity
    pub fn is_over_capacity(&self, assigned_count: usize) -> bool {
        assigned_count > self.capacity as usize
    }
}
