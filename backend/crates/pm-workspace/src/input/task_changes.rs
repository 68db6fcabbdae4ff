#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub name: Option<String>,
    pub status: Option<String>,
    /// `Some(None)` clears the assignee; `None` leaves it alone
    pub assignee_id: Option<Option<String>>,
}
