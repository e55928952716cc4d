//! NEIS open API adapter. Implements SchoolInfoGateway.
//!
//! Provides the HTTPS gateway, payload normalization, and a mock gateway
//! for running without credentials.

pub mod client;
pub mod mock;
pub mod payload;

pub use client::NeisGateway;
pub use mock::MockSchoolInfoGateway;
