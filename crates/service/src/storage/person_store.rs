use async_trait::async_trait;
use models::Person;

/// Append-only, insertion-ordered collection of submitted persons.
///
/// No update or delete exists; implementations only grow.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Append one record and return the number of records held afterwards.
    /// The returned count must be observed under the same guard as the append.
    async fn append(&self, person: Person) -> usize;
    /// Every record in insertion order.
    async fn list(&self) -> Vec<Person>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
