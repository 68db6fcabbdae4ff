/// Raw project fields as received from a client. Everything is optional;
/// normalization happens in [`Workspace::create_project`](crate::Workspace::create_project).
#[derive(Debug, Clone, Default)]
pub struct NewProjectInput {
    pub name: Option<String>,
    pub status: Option<String>,
    /// Already dropped by the transport when not a number
    pub progress: Option<f64>,
    pub due_date: Option<String>,
    pub studio_lead: Option<String>,
    pub team: Option<Vec<String>>,
}
