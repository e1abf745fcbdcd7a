use std::sync::Arc;

use models::{Person, PersonResponse};
use tracing::info;

use crate::storage::person_store::PersonStore;

/// Submit and list operations over a shared [`PersonStore`].
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
}

impl PersonService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Append a decoded person and build the success envelope.
    pub async fn submit(&self, person: Person) -> PersonResponse {
        log_received(&person);
        let total = self.store.append(person.clone()).await;
        info!(event = "person_saved", total_persons = total, "person saved");
        PersonResponse::saved(person, total)
    }

    pub async fn list_all(&self) -> Vec<Person> {
        self.store.list().await
    }
}

fn log_received(person: &Person) {
    info!(
        event = "person_received",
        name = %person.full_name(),
        age = person.age,
        address = %person.address_summary(),
        children = person.children_summary().as_deref(),
        "received person"
    );
}
