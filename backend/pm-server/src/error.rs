use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pm_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pm_db::DbError),

    #[error("Workspace error: {0}")]
    Workspace(#[from] pm_workspace::WorkspaceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
