//! Kakao skill response envelope (version 2.0).
//!
//! Wire-format types local to this adapter, built from the domain
//! `ChatResponse`. Immutable once serialized.

use serde::Serialize;

use crate::domain::{ChatResponse, QuickAction, QuickReply};

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub version: &'static str,
    pub template: Template,
}

#[derive(Debug, Serialize)]
pub struct Template {
    pub outputs: Vec<Output>,
    #[serde(rename = "quickReplies", skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<WireQuickReply>,
}

#[derive(Debug, Serialize)]
pub struct Output {
    #[serde(rename = "simpleText")]
    pub simple_text: SimpleText,
}

#[derive(Debug, Serialize)]
pub struct SimpleText {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct WireQuickReply {
    pub label: String,
    pub action: &'static str,
    #[serde(rename = "messageText", skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(rename = "blockId", skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl From<ChatResponse> for SkillResponse {
    fn from(response: ChatResponse) -> Self {
        Self {
            version: "2.0",
            template: Template {
                outputs: vec![Output {
                    simple_text: SimpleText {
                        text: response.text,
                    },
                }],
                quick_replies: response
                    .quick_replies
                    .into_iter()
                    .map(WireQuickReply::from)
                    .collect(),
            },
        }
    }
}

impl From<QuickReply> for WireQuickReply {
    fn from(reply: QuickReply) -> Self {
        match reply.action {
            QuickAction::Message { text } => Self {
                label: reply.label,
                action: "message",
                message_text: Some(text),
                block_id: None,
            },
            QuickAction::Block { block_id } => Self {
                label: reply.label,
                action: "block",
                message_text: None,
                block_id: Some(block_id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let response = ChatResponse {
            text: "3월 4일(월): 개학식".to_string(),
            quick_replies: vec![QuickReply::message("이번주", "이번주")],
        };

        let envelope = serde_json::to_value(SkillResponse::from(response)).unwrap();

        assert_eq!(
            envelope,
            json!({
                "version": "2.0",
                "template": {
                    "outputs": [{"simpleText": {"text": "3월 4일(월): 개학식"}}],
                    "quickReplies": [
                        {"label": "이번주", "action": "message", "messageText": "이번주"}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_empty_quick_replies_are_omitted() {
        let response = ChatResponse {
            text: "급식 정보가 없습니다.".to_string(),
            quick_replies: Vec::new(),
        };

        let envelope = serde_json::to_value(SkillResponse::from(response)).unwrap();

        assert!(envelope["template"].get("quickReplies").is_none());
    }

    #[test]
    fn test_block_quick_reply_carries_block_id() {
        let wire = WireQuickReply::from(QuickReply::block("메뉴", "block-42"));
        let value = serde_json::to_value(wire).unwrap();

        assert_eq!(
            value,
            json!({"label": "메뉴", "action": "block", "blockId": "block-42"})
        );
    }
}
