use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::person::Person;

pub const SAVED_MESSAGE: &str = "Person saved successfully!";
pub const FAILED_PREFIX: &str = "Error saving person: ";

/// Envelope returned by a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub message: String,
    pub person: Option<Person>,
    pub total_persons: usize,
}

impl PersonResponse {
    pub fn saved(person: Person, total_persons: usize) -> Self {
        Self { message: SAVED_MESSAGE.to_string(), person: Some(person), total_persons }
    }

    /// Failure envelope: no person and a zero count, whatever the store holds.
    pub fn failed(cause: impl std::fmt::Display) -> Self {
        Self { message: format!("{FAILED_PREFIX}{cause}"), person: None, total_persons: 0 }
    }
}
