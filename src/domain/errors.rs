//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. A reachable upstream that
//! simply has no matching records is NOT an error — that outcome is an empty
//! record list.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Upstream school-info fault: network failure, timeout, non-success
    /// status, or a malformed payload.
    #[error("school-info gateway error: {0}")]
    Gateway(String),
}
