use crate::core::models::Employee;

/// Outcome of a background fetch, sent back to the UI thread. Errors are
/// stringified at the boundary so results stay cheap to clone.
#[derive(Debug, Clone)]
pub enum TaskResult {
    DirectoryLoaded(Result<Vec<Employee>, String>),
    EmployeeLoaded { id: u32, result: Result<Employee, String> },
}
