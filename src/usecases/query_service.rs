//! Query dispatch service. Maps chatbot intents to schedule/meal lookups.
//!
//! Coordinates the date-range resolver, the school-info gateway, and the
//! text formatter into one terminal response per request.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::{info, warn};

use crate::domain::{calendar, format};
use crate::domain::{ChatResponse, DateRange, DomainError, QuickReply};
use crate::ports::{QueryPort, SchoolInfoGateway};

/// Fallback for intents outside the supported set.
const FALLBACK_TEXT: &str =
    "잘못된 요청입니다. '이번주', '다음주', '이번달', '오늘 급식', '내일 급식' 중 하나를 선택해 주세요.";

/// Generic upstream-fault text. Raw error detail never reaches the user.
const FETCH_ERROR_TEXT: &str = "정보를 불러오지 못했습니다. 잠시 후 다시 시도해 주세요.";

/// The five terminal query kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    CurrentWeek,
    NextWeek,
    CurrentMonth,
    MealToday,
    MealTomorrow,
}

/// Priority-ordered intent tokens. First containment match wins, so the
/// two-word meal forms sit above the bare "급식" token.
const INTENT_RULES: &[(&str, QueryKind)] = &[
    ("내일 급식", QueryKind::MealTomorrow),
    ("오늘 급식", QueryKind::MealToday),
    ("급식", QueryKind::MealToday),
    ("다음주", QueryKind::NextWeek),
    ("이번주", QueryKind::CurrentWeek),
    ("이번달", QueryKind::CurrentMonth),
];

impl QueryKind {
    /// Match an inbound intent text by substring containment against the
    /// rule table. Blank input never matches.
    pub fn match_intent(intent: &str) -> Option<Self> {
        let intent = intent.trim();
        if intent.is_empty() {
            return None;
        }
        INTENT_RULES
            .iter()
            .find(|(token, _)| intent.contains(token))
            .map(|(_, kind)| *kind)
    }
}

/// Service dispatching one intent per call. Stateless between requests.
pub struct QueryService {
    gateway: Arc<dyn SchoolInfoGateway>,
}

impl QueryService {
    pub fn new(gateway: Arc<dyn SchoolInfoGateway>) -> Self {
        Self { gateway }
    }

    /// Standard quick-reply menu, re-offered with every response.
    fn standard_quick_replies() -> Vec<QuickReply> {
        ["이번주", "다음주", "이번달", "오늘 급식", "내일 급식"]
            .into_iter()
            .map(|label| QuickReply::message(label, label))
            .collect()
    }

    fn respond(text: String) -> ChatResponse {
        ChatResponse {
            text,
            quick_replies: Self::standard_quick_replies(),
        }
    }

    async fn dispatch(&self, kind: QueryKind, today: NaiveDate) -> ChatResponse {
        let outcome = match kind {
            QueryKind::CurrentWeek => {
                self.schedule_text(calendar::week_range(today, 0), "이번주").await
            }
            QueryKind::NextWeek => {
                self.schedule_text(calendar::week_range(today, 1), "다음주").await
            }
            QueryKind::CurrentMonth => {
                self.schedule_text(calendar::month_range(today), "이번달").await
            }
            QueryKind::MealToday => self.meal_text(today).await,
            QueryKind::MealTomorrow => self.meal_text(today + Duration::days(1)).await,
        };

        let text = outcome.unwrap_or_else(|e| {
            warn!(error = %e, kind = ?kind, "upstream fetch failed");
            FETCH_ERROR_TEXT.to_string()
        });
        Self::respond(text)
    }

    async fn schedule_text(
        &self,
        range: DateRange,
        label: &str,
    ) -> Result<String, DomainError> {
        let entries = self.gateway.fetch_schedule(&range).await?;
        info!(
            label,
            entries = entries.len(),
            from = %range.start,
            to = %range.end,
            "schedule fetched"
        );
        Ok(format::format_schedule_block(&entries, label))
    }

    async fn meal_text(&self, date: NaiveDate) -> Result<String, DomainError> {
        let entries = self.gateway.fetch_meals(date).await?;
        info!(%date, entries = entries.len(), "meals fetched");
        Ok(format::format_meal_block(&entries))
    }
}

#[async_trait::async_trait]
impl QueryPort for QueryService {
    async fn handle_intent(&self, intent: &str) -> ChatResponse {
        match QueryKind::match_intent(intent) {
            Some(kind) => self.dispatch(kind, calendar::today_seoul()).await,
            None => {
                info!(intent, "unrecognized intent");
                Self::respond(FALLBACK_TEXT.to_string())
            }
        }
    }
}
