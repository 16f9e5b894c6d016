//! Client for the public demo employee API (dummyjson.com). The schema is
//! owned by the upstream collaborator; only the consumed fields are decoded.

use reqwest::Client;
use serde::Deserialize;

use crate::core::{
    models::Employee,
    StaffscopeError,
};

const BASE_URL: &str = "https://dummyjson.com";

/// How many records the dashboard asks the demo API for per refresh.
pub const DIRECTORY_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<Employee>,
}

pub async fn fetch_employees(limit: usize) -> Result<Vec<Employee>, StaffscopeError> {
    let url = format!("{}/users?limit={}", BASE_URL, limit);
    let response = Client::new().get(&url).send().await?;

    if !response.status().is_success() {
        return Err(StaffscopeError::Custom(format!(
            "HTTP error {} from {}",
            response.status(),
            url
        )));
    }

    let body: UsersResponse = response.json().await?;
    Ok(body.users)
}

pub async fn fetch_employee(id: u32) -> Result<Employee, StaffscopeError> {
    let url = format!("{}/users/{}", BASE_URL, id);
    let response = Client::new().get(&url).send().await?;

    // dummyjson answers an unknown id with a non-success status.
    if !response.status().is_success() {
        return Err(StaffscopeError::EmployeeNotFound(id));
    }

    Ok(response.json().await?)
}
