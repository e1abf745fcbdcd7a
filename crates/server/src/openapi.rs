use models::{Address, Person, PersonResponse};
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::persons::save_person,
        crate::routes::persons::list_persons,
    ),
    components(
        schemas(
            HealthResponse,
            Address,
            Person,
            PersonResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "person")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_person_routes_and_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let person_path = &doc["paths"]["/api/person"];
        assert!(person_path.get("get").is_some());
        assert!(person_path.get("post").is_some());
        assert!(doc["paths"].get("/health").is_some());

        let schemas = &doc["components"]["schemas"];
        assert!(schemas["Person"]["properties"].get("firstName").is_some());
        assert!(schemas["Address"]["properties"].get("zipCode").is_some());
        assert!(schemas["PersonResponse"]["properties"].get("totalPersons").is_some());
    }
}
