use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffscopeError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Employee {0} not found")]
    EmployeeNotFound(u32),

    #[error("StaffscopeError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for StaffscopeError {
    fn from(error: std::io::Error) -> Self {
        StaffscopeError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for StaffscopeError {
    fn from(error: reqwest::Error) -> Self {
        StaffscopeError::Reqwest(Box::new(error))
    }
}
