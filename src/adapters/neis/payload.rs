//! NEIS payload normalization. Raw JSON to domain records.
//!
//! On success the API wraps records as
//! `{ "<Endpoint>": [headerMeta, {"row": [...]}] }` and simply omits the
//! endpoint key on failure or when no records match. The first array element
//! is header metadata and is ignored.

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{MealEntry, MealSlot, ScheduleEntry};

/// Endpoint name and top-level payload key of the schedule API.
pub const SCHEDULE_KEY: &str = "SchoolSchedule";

/// Endpoint name and top-level payload key of the meal API.
pub const MEAL_KEY: &str = "mealServiceDietInfo";

/// 8-digit date format NEIS uses in both directions.
pub const YMD_FORMAT: &str = "%Y%m%d";

/// Line-break markers NEIS embeds in menu text. All three variants occur.
const BR_MARKERS: [&str; 3] = ["<br/>", "<br />", "<br>"];

/// Record list under `key`. The row list lives in the second element of the
/// 2-element array; a missing key, a short array, or a missing `row` field
/// all mean "no data".
fn rows<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    payload
        .get(key)
        .and_then(|v| v.get(1))
        .and_then(|v| v.get("row"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Schedule rows to entries: parseable date, non-blank trimmed event name,
/// input order preserved (the upstream returns chronological order and no
/// re-sorting is performed).
pub fn normalize_schedule(payload: &Value) -> Vec<ScheduleEntry> {
    rows(payload, SCHEDULE_KEY)
        .iter()
        .filter_map(|row| {
            let raw_date = row.get("AA_YMD").and_then(Value::as_str)?;
            let date = NaiveDate::parse_from_str(raw_date, YMD_FORMAT).ok()?;
            let event = row.get("EVENT_NM").and_then(Value::as_str)?.trim();
            if event.is_empty() {
                return None;
            }
            Some(ScheduleEntry {
                date,
                event_name: event.to_string(),
            })
        })
        .collect()
}

/// Meal rows to entries. At most the first 3 rows, slots assigned
/// positionally; 1 or 2 rows yield partial results.
pub fn normalize_meal(payload: &Value) -> Vec<MealEntry> {
    rows(payload, MEAL_KEY)
        .iter()
        .take(3)
        .enumerate()
        .filter_map(|(index, row)| {
            let slot = MealSlot::from_index(index)?;
            let menu = row.get("DDISH_NM").and_then(Value::as_str).unwrap_or_default();
            let calories = row.get("CAL_INFO").and_then(Value::as_str).unwrap_or_default();
            Some(MealEntry {
                slot,
                menu_text: decode_menu(menu),
                calorie_text: calories.to_string(),
            })
        })
        .collect()
}

fn decode_menu(raw: &str) -> String {
    let mut text = raw.to_string();
    for marker in BR_MARKERS {
        text = text.replace(marker, "\n");
    }
    text
}
