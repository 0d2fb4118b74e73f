use chrono::{Datelike, Local, NaiveDate};

use crate::types::{DrawDate, GloRequest};

/// Draws fall on the 1st and 16th, pushed back up to two days around holidays.
const DRAW_DAYS: [u32; 5] = [1, 2, 3, 16, 17];

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const BUDDHIST_ERA_OFFSET: i32 = 543;

pub fn is_plausible_draw_day(date: &DrawDate) -> bool {
    DRAW_DAYS.contains(&date.day())
}

/// Nearest past official draw day relative to the local clock.
pub fn guess_recent_draw_iso() -> DrawDate {
    guess_recent_draw_on(Local::now().date_naive())
}

pub fn guess_recent_draw_on(today: NaiveDate) -> DrawDate {
    let day = if today.day() >= 16 { 16 } else { 1 };
    // day 1 and 16 exist in every month
    DrawDate::new(today.with_day(day).unwrap_or(today))
}

/// Parses draw dates as the result sources print them: ISO `2024-10-16` or
/// Thai `16 ตุลาคม 2567` (Buddhist era year).
pub fn parse_draw_date_text(text: &str) -> Option<DrawDate> {
    let text = text.trim();
    if let Some(date) = DrawDate::parse_iso(text) {
        return Some(date);
    }

    let mut parts = text.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let month_name = parts.next()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let month = THAI_MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    let year = if year > 2400 {
        year - BUDDHIST_ERA_OFFSET
    } else {
        year
    };
    DrawDate::from_ymd(year, month, day)
}

pub fn glo_request_for(date: &DrawDate) -> GloRequest {
    let date = date.date();
    GloRequest {
        date: format!("{:02}", date.day()),
        month: format!("{:02}", date.month()),
        year: date.year().to_string(),
    }
}
