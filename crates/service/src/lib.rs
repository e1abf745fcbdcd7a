//! Service layer for the person store.
//! - `storage` owns the records behind the `PersonStore` trait.
//! - `person_service` implements submit and list on top of a store.
//! - `errors` carries the internal failure causes of a submission.

pub mod errors;
pub mod person_service;
pub mod storage;

pub use person_service::PersonService;
