//! Mapping of provider JSON onto [`PrizeTierSet`].
//!
//! Sources disagree on envelopes and field names. Three shapes are known:
//! flat objects with alias names, the official GLO layout
//! (`result.data.<category>.number[].value`) and the tagged-array layout
//! (`prizes: [{id, number}]`, `runningNumbers: [{id, number}]`).

use serde_json::{Map, Value};

use crate::types::PrizeTierSet;
use crate::utils::parse_draw_date_text;

const FIRST: &[&str] = &["first", "prize1", "prizeFirst"];
const NEARBY_FIRST: &[&str] = &[
    "nearbyFirst",
    "adjacentFirst",
    "adjacent",
    "near1",
    "prizeFirstNear",
];
const SECOND: &[&str] = &["second", "prize2", "prizeSecond"];
const THIRD: &[&str] = &["third", "prize3", "prizeThird"];
const FOURTH: &[&str] = &["fourth", "prize4", "prizeForth", "prizeFourth"];
const FIFTH: &[&str] = &["fifth", "prize5", "prizeFifth"];
const FRONT_THREE: &[&str] = &[
    "frontThree",
    "firstThree",
    "front3",
    "last3f",
    "runningNumberFrontThree",
];
const BACK_THREE: &[&str] = &[
    "backThree",
    "lastThree",
    "back3",
    "last3b",
    "runningNumberBackThree",
];
const LAST_TWO: &[&str] = &["lastTwo", "last2", "two", "2digits", "runningNumberBackTwo"];

const TAGGED_ARRAYS: &[&str] = &["prizes", "runningNumbers"];

/// Returns `None` when the payload is not an object or carries no usable date.
/// Missing tiers are tolerated and come back empty.
pub fn normalize(raw: &Value) -> Option<PrizeTierSet> {
    let record = pick(raw.as_object()?, &["response"])
        .and_then(Value::as_object)
        .or_else(|| raw.as_object())?;

    let date = draw_date(record)?;
    let prizes = prize_object(record);

    Some(PrizeTierSet {
        date,
        first: single(&prizes, FIRST),
        nearby_first: list(&prizes, NEARBY_FIRST),
        second: list(&prizes, SECOND),
        third: list(&prizes, THIRD),
        fourth: list(&prizes, FOURTH),
        fifth: list(&prizes, FIFTH),
        front_three: list(&prizes, FRONT_THREE),
        back_three: list(&prizes, BACK_THREE),
        last_two: single(&prizes, LAST_TWO),
    })
}

fn draw_date(record: &Map<String, Value>) -> Option<String> {
    let text = ["date", "drawDate"]
        .iter()
        .filter_map(|key| record.get(*key))
        .chain(record.get("result").and_then(|r| r.get("date")))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|text| !text.is_empty())?;

    Some(match parse_draw_date_text(text) {
        Some(date) => date.to_string(),
        None => text.to_string(),
    })
}

fn prize_object(record: &Map<String, Value>) -> Map<String, Value> {
    if let Some(tagged) = tagged_prizes(record) {
        return tagged;
    }

    let candidate = ["prizes", "result"]
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(Value::as_object)
        .unwrap_or(record);

    candidate
        .get("data")
        .and_then(Value::as_object)
        .unwrap_or(candidate)
        .clone()
}

/// Flattens `[{id, number}]` arrays into an `id -> number` object.
fn tagged_prizes(record: &Map<String, Value>) -> Option<Map<String, Value>> {
    let mut flattened = Map::new();
    for key in TAGGED_ARRAYS {
        let Some(entries) = record.get(*key).and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            if let (Some(id), Some(number)) =
                (entry.get("id").and_then(Value::as_str), entry.get("number"))
            {
                flattened.insert(id.to_string(), number.clone());
            }
        }
    }
    if flattened.is_empty() {
        None
    } else {
        Some(flattened)
    }
}

/// First alias that is present and not empty.
fn pick<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| match value {
            Value::Null | Value::Bool(false) => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn list(object: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    let mut numbers = Vec::new();
    if let Some(value) = pick(object, keys) {
        collect_numbers(value, &mut numbers);
    }
    numbers
}

fn single(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    list(object, keys).into_iter().next()
}

fn collect_numbers(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect_numbers(item, out)),
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() {
                out.push(s.to_string());
            }
        }
        Value::Number(n) => out.push(n.to_string()),
        Value::Object(inner) => {
            if let Some(nested) = inner.get("number").or_else(|| inner.get("value")) {
                collect_numbers(nested, out);
            }
        }
        Value::Null | Value::Bool(_) => {}
    }
}
