//! Inbound webhook route. Parses the Kakao skill request and delegates to
//! the query port.
//!
//! The handler always answers 200 with a skill envelope — an unreadable body
//! resolves to a blank intent, which the dispatcher turns into the fallback
//! response.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use super::envelope::SkillResponse;
use crate::ports::QueryPort;

/// Kakao skill request body. Only the fields used for intent resolution are
/// modeled; the rest of the payload is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "userRequest")]
    pub user_request: Option<UserRequest>,
    #[serde(default)]
    pub intent: Option<IntentRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub utterance: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IntentRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl SkillRequest {
    /// Intent text in priority order: `action`, then the raw utterance, then
    /// the matched intent name. Blank candidates are skipped.
    pub fn intent_text(&self) -> &str {
        [
            self.action.as_deref(),
            self.user_request.as_ref().and_then(|u| u.utterance.as_deref()),
            self.intent.as_ref().and_then(|i| i.name.as_deref()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("")
    }
}

/// Build the webhook router around a query port.
pub fn router(service: Arc<dyn QueryPort>) -> Router {
    Router::new()
        .route("/skill", post(handle_skill))
        .with_state(service)
}

async fn handle_skill(
    State(service): State<Arc<dyn QueryPort>>,
    body: String,
) -> Json<SkillResponse> {
    let request: SkillRequest = serde_json::from_str(&body).unwrap_or_default();
    let intent = request.intent_text();
    info!(intent, "skill request received");
    let response = service.handle_intent(intent).await;
    Json(SkillResponse::from(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> SkillRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_intent_text_prefers_action() {
        let req = request(json!({
            "action": "이번주",
            "userRequest": {"utterance": "다음주"},
            "intent": {"name": "이번달"}
        }));
        assert_eq!(req.intent_text(), "이번주");
    }

    #[test]
    fn test_intent_text_falls_back_to_utterance_then_name() {
        let req = request(json!({
            "userRequest": {"utterance": "  오늘 급식  "},
            "intent": {"name": "급식조회"}
        }));
        assert_eq!(req.intent_text(), "오늘 급식");

        let req = request(json!({"intent": {"name": "급식조회"}}));
        assert_eq!(req.intent_text(), "급식조회");
    }

    #[test]
    fn test_intent_text_blank_fields_resolve_empty() {
        let req = request(json!({"action": "   ", "userRequest": {}}));
        assert_eq!(req.intent_text(), "");

        let req = request(json!({}));
        assert_eq!(req.intent_text(), "");
    }
}
