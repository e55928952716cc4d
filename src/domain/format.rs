//! Localized display text. Korean dates, schedule and meal blocks.

use chrono::{Datelike, NaiveDate};

use crate::domain::{MealEntry, ScheduleEntry};

/// Korean weekday symbols indexed by ISO weekday (Monday = 0).
const WEEKDAYS_KO: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Shown when the upstream has no meal records for the requested day.
pub const NO_MEAL_TEXT: &str = "급식 정보가 없습니다.";

/// `"{month}월 {day}일({weekday})"`, no zero-padding.
pub fn format_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_KO[date.weekday().num_days_from_monday() as usize];
    format!("{}월 {}일({})", date.month(), date.day(), weekday)
}

/// One `"{date}: {event}"` line per entry, newline-joined, input order.
/// Empty input renders the no-schedule text for `range_label`.
pub fn format_schedule_block(entries: &[ScheduleEntry], range_label: &str) -> String {
    if entries.is_empty() {
        return format!("{} 학사일정이 없습니다.", range_label);
    }
    entries
        .iter()
        .map(|entry| format!("{}: {}", format_date(entry.date), entry.event_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-slot sections joined with a blank line, slot order as given.
pub fn format_meal_block(entries: &[MealEntry]) -> String {
    if entries.is_empty() {
        return NO_MEAL_TEXT.to_string();
    }
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\n{}\n총 {}",
                entry.slot.label_ko(),
                entry.menu_text,
                entry.calorie_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MealSlot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_monday() {
        assert_eq!(format_date(date(2024, 3, 4)), "3월 4일(월)");
    }

    #[test]
    fn test_format_date_sunday_no_padding() {
        assert_eq!(format_date(date(2024, 12, 1)), "12월 1일(일)");
    }

    #[test]
    fn test_schedule_block_empty() {
        assert_eq!(
            format_schedule_block(&[], "이번주"),
            "이번주 학사일정이 없습니다."
        );
    }

    #[test]
    fn test_schedule_block_lines_in_input_order() {
        let entries = vec![
            ScheduleEntry {
                date: date(2024, 3, 4),
                event_name: "개학식".to_string(),
            },
            ScheduleEntry {
                date: date(2024, 3, 5),
                event_name: "학부모 상담".to_string(),
            },
        ];
        assert_eq!(
            format_schedule_block(&entries, "이번주"),
            "3월 4일(월): 개학식\n3월 5일(화): 학부모 상담"
        );
    }

    #[test]
    fn test_meal_block_empty() {
        assert_eq!(format_meal_block(&[]), NO_MEAL_TEXT);
    }

    #[test]
    fn test_meal_block_sections_blank_line_separated() {
        let entries = vec![
            MealEntry {
                slot: MealSlot::Breakfast,
                menu_text: "쌀밥\n미역국".to_string(),
                calorie_text: "512.3 Kcal".to_string(),
            },
            MealEntry {
                slot: MealSlot::Lunch,
                menu_text: "비빔밥".to_string(),
                calorie_text: "780.1 Kcal".to_string(),
            },
        ];
        assert_eq!(
            format_meal_block(&entries),
            "조식\n쌀밥\n미역국\n총 512.3 Kcal\n\n중식\n비빔밥\n총 780.1 Kcal"
        );
    }
}
