//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use chrono::NaiveDate;

use crate::domain::{DateRange, DomainError, MealEntry, ScheduleEntry};

/// School-information gateway (NEIS open API). Fetch schedule and meal records.
#[async_trait::async_trait]
pub trait SchoolInfoGateway: Send + Sync {
    /// Academic-schedule entries within `range` (inclusive bounds), in the
    /// order the upstream returned them. An empty vec means the upstream was
    /// reachable but had no records for the range — not a failure.
    async fn fetch_schedule(
        &self,
        range: &DateRange,
    ) -> Result<Vec<ScheduleEntry>, DomainError>;

    /// Meal entries for a single day, at most one per slot in
    /// Breakfast→Lunch→Dinner order. Same empty-vec contract as above.
    async fn fetch_meals(&self, date: NaiveDate) -> Result<Vec<MealEntry>, DomainError>;
}
