//! Mock school-info gateway for running without NEIS credentials.
//!
//! Returns hardcoded records for development and testing purposes.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{DateRange, DomainError, MealEntry, MealSlot, ScheduleEntry};
use crate::ports::SchoolInfoGateway;

/// Mock gateway. Simulates network latency with a configurable delay and
/// answers every query with predetermined records.
pub struct MockSchoolInfoGateway {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockSchoolInfoGateway {
    /// Create a new mock gateway with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock gateway with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockSchoolInfoGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SchoolInfoGateway for MockSchoolInfoGateway {
    async fn fetch_schedule(
        &self,
        range: &DateRange,
    ) -> Result<Vec<ScheduleEntry>, DomainError> {
        info!(from = %range.start, to = %range.end, "[MOCK] Simulating schedule fetch");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(vec![
            ScheduleEntry {
                date: range.start,
                event_name: "[MOCK] 개교기념일".to_string(),
            },
            ScheduleEntry {
                date: range.end,
                event_name: "[MOCK] 학부모 상담주간".to_string(),
            },
        ])
    }

    async fn fetch_meals(&self, date: NaiveDate) -> Result<Vec<MealEntry>, DomainError> {
        info!(%date, "[MOCK] Simulating meal fetch");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(vec![
            MealEntry {
                slot: MealSlot::Breakfast,
                menu_text: "[MOCK] 쌀밥\n미역국\n김치".to_string(),
                calorie_text: "512.3 Kcal".to_string(),
            },
            MealEntry {
                slot: MealSlot::Lunch,
                menu_text: "[MOCK] 비빔밥\n된장국".to_string(),
                calorie_text: "780.1 Kcal".to_string(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway() {
        let gateway = MockSchoolInfoGateway::with_delay(10);
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        };

        let schedule = gateway.fetch_schedule(&range).await.unwrap();
        assert_eq!(schedule.len(), 2);
        assert!(range.contains(schedule[0].date));

        let meals = gateway
            .fetch_meals(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
            .await
            .unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].slot, MealSlot::Breakfast);
        assert_eq!(meals[1].slot, MealSlot::Lunch);
    }
}
