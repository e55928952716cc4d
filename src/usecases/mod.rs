//! Application use cases. Orchestrate domain logic via ports.

pub mod query_service;

pub use query_service::{QueryKind, QueryService};
