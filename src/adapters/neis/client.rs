//! NEIS open API gateway. Implements SchoolInfoGateway over HTTPS.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::payload::{self, MEAL_KEY, SCHEDULE_KEY, YMD_FORMAT};
use crate::domain::{DateRange, DomainError, MealEntry, ScheduleEntry};
use crate::ports::SchoolInfoGateway;

/// School-information API client.
///
/// One fixed school per instance (office code + school code); credentials and
/// base URL are injected at construction, never read from ambient state.
/// Every request is bounded by the client-wide timeout so a slow upstream
/// cannot stall the chat platform past its own skill deadline.
pub struct NeisGateway {
    client: Client,
    base_url: String,
    api_key: String,
    office_code: String,
    school_code: String,
}

impl NeisGateway {
    /// Create a new gateway.
    ///
    /// # Arguments
    /// * `base_url` - API base (e.g. "https://open.neis.go.kr/hub")
    /// * `api_key` - NEIS open API key
    /// * `office_code` - Education office code (e.g. "P10")
    /// * `school_code` - School code (e.g. "8321081")
    /// * `timeout` - Per-request deadline; elapsing maps to a gateway error
    pub fn new(
        base_url: String,
        api_key: String,
        office_code: String,
        school_code: String,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url,
            api_key,
            office_code,
            school_code,
        }
    }

    async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, DomainError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Gateway(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, endpoint, "NEIS returned error");
            return Err(DomainError::Gateway(format!(
                "NEIS error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::Gateway(format!("malformed NEIS response: {}", e)))
    }
}

#[async_trait::async_trait]
impl SchoolInfoGateway for NeisGateway {
    async fn fetch_schedule(
        &self,
        range: &DateRange,
    ) -> Result<Vec<ScheduleEntry>, DomainError> {
        let from = range.start.format(YMD_FORMAT).to_string();
        let to = range.end.format(YMD_FORMAT).to_string();
        let payload = self
            .get_json(
                SCHEDULE_KEY,
                &[
                    ("KEY", self.api_key.as_str()),
                    ("Type", "json"),
                    ("ATPT_OFCDC_SC_CODE", self.office_code.as_str()),
                    ("SD_SCHUL_CODE", self.school_code.as_str()),
                    ("AA_FROM_YMD", from.as_str()),
                    ("AA_TO_YMD", to.as_str()),
                ],
            )
            .await?;
        debug!(from = %from, to = %to, "schedule payload received");
        Ok(payload::normalize_schedule(&payload))
    }

    async fn fetch_meals(&self, date: NaiveDate) -> Result<Vec<MealEntry>, DomainError> {
        let ymd = date.format(YMD_FORMAT).to_string();
        let payload = self
            .get_json(
                MEAL_KEY,
                &[
                    ("KEY", self.api_key.as_str()),
                    ("Type", "json"),
                    ("pIndex", "1"),
                    ("pSize", "30"),
                    ("ATPT_OFCDC_SC_CODE", self.office_code.as_str()),
                    ("SD_SCHUL_CODE", self.school_code.as_str()),
                    ("MLSV_YMD", ymd.as_str()),
                ],
            )
            .await?;
        debug!(date = %ymd, "meal payload received");
        Ok(payload::normalize_meal(&payload))
    }
}
