/// Partial project edit. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub status: Option<String>,
    pub progress: Option<f64>,
    pub due_date: Option<String>,
    pub studio_lead: Option<String>,
    pub team: Option<Vec<String>>,
}
