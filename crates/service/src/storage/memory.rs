use std::sync::Arc;

use async_trait::async_trait;
use models::Person;
use tokio::sync::RwLock;

use crate::storage::person_store::PersonStore;

/// Process-lifetime person store backed by a `Vec` behind a single writer lock.
#[derive(Clone, Default)]
pub struct InMemoryPersonStore {
    inner: Arc<RwLock<Vec<Person>>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn append(&self, person: Person) -> usize {
        let mut persons = self.inner.write().await;
        persons.push(person);
        persons.len()
    }

    async fn list(&self) -> Vec<Person> {
        self.inner.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
