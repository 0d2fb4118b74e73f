use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Six ASCII digits printed on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketNumber(String);

impl TicketNumber {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.len() == 6 && text.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(text.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn front_three(&self) -> &str {
        &self.0[..3]
    }

    pub fn back_three(&self) -> &str {
        &self.0[3..]
    }

    pub fn last_two(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar date of a draw, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DrawDate(NaiveDate);

impl DrawDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn parse_iso(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .ok()
            .map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for DrawDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Which draw a lookup asks the result sources for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelector {
    Draw(DrawDate),
    Latest,
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSelector::Draw(date) => date.fmt(f),
            DateSelector::Latest => f.write_str("latest"),
        }
    }
}

/// Canonical prize numbers of one draw, whatever source they came from.
///
/// Strings are stored trimmed and never empty. Missing tiers are empty and
/// simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeTierSet {
    pub date: String,
    pub first: Option<String>,
    pub nearby_first: Vec<String>,
    pub second: Vec<String>,
    pub third: Vec<String>,
    pub fourth: Vec<String>,
    pub fifth: Vec<String>,
    pub front_three: Vec<String>,
    pub back_three: Vec<String>,
    pub last_two: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrizeMatch {
    FirstPrize,
    NearbyFirst,
    SecondPrize,
    ThirdPrize,
    FourthPrize,
    FifthPrize,
    FrontThree,
    BackThree,
    LastTwo,
    NoMatch,
}

impl PrizeMatch {
    pub fn is_winner(&self) -> bool {
        !matches!(self, PrizeMatch::NoMatch)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrizeMatch::FirstPrize => "รางวัลที่ 1",
            PrizeMatch::NearbyFirst => "รางวัลข้างเคียงรางวัลที่ 1",
            PrizeMatch::SecondPrize => "รางวัลที่ 2",
            PrizeMatch::ThirdPrize => "รางวัลที่ 3",
            PrizeMatch::FourthPrize => "รางวัลที่ 4",
            PrizeMatch::FifthPrize => "รางวัลที่ 5",
            PrizeMatch::FrontThree => "รางวัลเลขหน้า 3 ตัว",
            PrizeMatch::BackThree => "รางวัลเลขท้าย 3 ตัว",
            PrizeMatch::LastTwo => "รางวัลเลขท้าย 2 ตัว",
            PrizeMatch::NoMatch => "เสียใจ ไม่ถูกรางวัล",
        }
    }
}

impl fmt::Display for PrizeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Request body of the GLO result checking endpoint.
#[derive(Serialize)]
pub struct GloRequest {
    pub date: String,
    pub month: String,
    pub year: String,
}
