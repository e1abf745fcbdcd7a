//! Storage abstractions for service layer
//!
//! `PersonStore` is the seam; `InMemoryPersonStore` is the process-lifetime
//! implementation used by the server.

pub mod memory;
pub mod person_store;
