use axum::{extract::{rejection::JsonRejection, State}, Json};
use models::{Person, PersonResponse};

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Store a person and echo it back with the new total.
#[utoipa::path(
    post,
    path = "/api/person",
    tag = "person",
    request_body = Person,
    responses(
        (status = 200, description = "Person saved", body = PersonResponse),
        (status = 400, description = "Payload could not be decoded", body = PersonResponse)
    )
)]
pub async fn save_person(
    State(state): State<ServerState>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<Json<PersonResponse>, ApiError> {
    let Json(person) = payload?;
    Ok(Json(state.persons.submit(person).await))
}

/// Every stored person, oldest first.
#[utoipa::path(
    get,
    path = "/api/person",
    tag = "person",
    responses((status = 200, description = "All stored persons", body = [Person]))
)]
pub async fn list_persons(State(state): State<ServerState>) -> Json<Vec<Person>> {
    Json(state.persons.list_all().await)
}
