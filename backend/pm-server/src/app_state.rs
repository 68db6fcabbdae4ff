use pm_workspace::Workspace;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub workspace: Workspace,
}

impl AppState {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    pub fn backend_name(&self) -> &'static str {
        self.workspace.store().backend_name()
    }
}
