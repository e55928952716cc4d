//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/Kakao wire types here — those are mapped in adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-day range. `start <= end`, no time-of-day component.
///
/// Built fresh per request from "now" in the configured timezone; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A single academic-schedule record.
///
/// `event_name` is non-blank after trimming; blank rows are dropped during
/// normalization and never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub event_name: String,
}

/// Meal slot. Assigned by positional index in the upstream row list, not by
/// any field in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Slot for the upstream row at `index` (0 → Breakfast, 1 → Lunch,
    /// 2 → Dinner). Rows beyond the third have no slot.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Breakfast),
            1 => Some(Self::Lunch),
            2 => Some(Self::Dinner),
            _ => None,
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            Self::Breakfast => "조식",
            Self::Lunch => "중식",
            Self::Dinner => "석식",
        }
    }
}

/// A single meal record. At most one per slot per query, ordered
/// Breakfast→Lunch→Dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub slot: MealSlot,
    pub menu_text: String,
    pub calorie_text: String,
}

/// Platform-agnostic chat response: body text plus follow-up quick replies.
/// The Kakao adapter serializes this into the skill envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
    pub quick_replies: Vec<QuickReply>,
}

/// Suggested follow-up action offered alongside a text response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: String,
    pub action: QuickAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    /// Re-send `text` as a user message when tapped.
    Message { text: String },
    /// Jump to another skill block.
    Block { block_id: String },
}

impl QuickReply {
    pub fn message(label: &str, text: &str) -> Self {
        Self {
            label: label.to_string(),
            action: QuickAction::Message {
                text: text.to_string(),
            },
        }
    }

    pub fn block(label: &str, block_id: &str) -> Self {
        Self {
            label: label.to_string(),
            action: QuickAction::Block {
                block_id: block_id.to_string(),
            },
        }
    }
}
