//! Wire types of the person store: the submitted `Person` record, its embedded
//! `Address`, and the `PersonResponse` envelope returned by a submission.

pub mod age;
pub mod person;
pub mod response;

pub use person::{Address, Person};
pub use response::PersonResponse;
