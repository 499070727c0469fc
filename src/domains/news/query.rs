//! Query builder for the AWS news API.
//!
//! Turns tool arguments into the ordered set of outbound query parameters:
//! `page_size`, `hide_regional_expansions`, `search`, then the optional
//! `article_type` and `since` filters.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::error::NewsError;

/// Default number of results for news and blog lookups.
pub const DEFAULT_NUMBER_OF_RESULTS: u32 = 40;

/// Default value of the `news_type` argument.
pub const DEFAULT_NEWS_TYPE: &str = "all";

/// Kind of articles to request from the news API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsType {
    All,
    News,
    Blogs,
}

impl NewsType {
    /// Interpret a caller-supplied news type.
    ///
    /// Matching is case-insensitive and `blog` is accepted for `blogs`.
    /// Unknown values fall back to [`NewsType::All`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "news" => Self::News,
            "blogs" | "blog" => Self::Blogs,
            _ => Self::All,
        }
    }

    /// Value of the `article_type` filter, if any.
    pub fn article_type(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::News => Some("news"),
            Self::Blogs => Some("blog"),
        }
    }

    /// Canonical lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::News => "news",
            Self::Blogs => "blogs",
        }
    }
}

/// A single request against the news API.
///
/// `news_type` keeps the caller's spelling so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub topic: String,
    pub news_type: String,
    pub include_regional_expansions: bool,
    pub limit: u32,
    pub since_date: Option<String>,
}

impl NewsQuery {
    /// Create a query for `topic` with every other argument at its default.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            news_type: DEFAULT_NEWS_TYPE.to_string(),
            include_regional_expansions: false,
            limit: DEFAULT_NUMBER_OF_RESULTS,
            since_date: None,
        }
    }

    pub fn with_news_type(mut self, news_type: impl Into<String>) -> Self {
        self.news_type = news_type.into();
        self
    }

    pub fn with_regional_expansions(mut self, include: bool) -> Self {
        self.include_regional_expansions = include;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_since_date(mut self, since_date: Option<String>) -> Self {
        self.since_date = since_date;
        self
    }

    /// The parsed news type.
    pub fn kind(&self) -> NewsType {
        NewsType::parse(&self.news_type)
    }

    /// Validate the query and build the outbound parameters.
    pub fn build_params(&self) -> Result<QueryParams, NewsError> {
        if self.topic.trim().is_empty() {
            return Err(NewsError::invalid_argument("Topic must not be empty"));
        }
        if self.limit == 0 {
            return Err(NewsError::invalid_argument(
                "number_of_results must be greater than zero",
            ));
        }

        let mut params = QueryParams::default();
        params.push("page_size", self.limit.to_string());
        params.push(
            "hide_regional_expansions",
            (!self.include_regional_expansions).to_string(),
        );
        params.push("search", self.topic.clone());

        if let Some(article_type) = self.kind().article_type() {
            params.push("article_type", article_type);
        }

        if let Some(since) = &self.since_date {
            validate_since_date(since)?;
            params.push("since", since.clone());
        }

        Ok(params)
    }
}

/// Ordered outbound query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push((name, value.into()));
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(key, _)| *key).collect()
    }

    /// URL-encode the parameters, preserving order.
    pub fn to_query_string(&self) -> Result<String, NewsError> {
        serde_urlencoded::to_string(&self.0)
            .map_err(|e| NewsError::unexpected(format!("Failed to encode query: {}", e)))
    }
}

/// Check that `value` is an ISO 8601 date or date-time.
///
/// Every `Z` is read as `+00:00` first. Accepted shapes:
///
/// - dates: `YYYY-MM-DD`, `YYYYMMDD`, week dates `YYYY-Www[-D]` and `YYYYWww[D]`
/// - an optional time after any single separator character: `HH[:MM[:SS[.f]]]`
///   or the basic `HH[MM[SS[.f]]]`, fraction introduced by `.` or `,`
/// - an optional `+`/`-` offset in the same clock shapes (not 1 or 3 digits),
///   strictly less than 24 hours
pub fn validate_since_date(value: &str) -> Result<(), NewsError> {
    if is_iso8601(&value.replace('Z', "+00:00")) {
        Ok(())
    } else {
        Err(NewsError::invalid_date())
    }
}

fn is_iso8601(value: &str) -> bool {
    let Some(date_len) = iso_date_len(value) else {
        return false;
    };
    let (date, rest) = value.split_at(date_len);
    if parse_iso_date(date).is_none() {
        return false;
    }

    let mut chars = rest.chars();
    match chars.next() {
        None => true,
        Some(_separator) => is_iso_time(chars.as_str()),
    }
}

/// Byte length of the date portion, judged from its first separators.
fn iso_date_len(value: &str) -> Option<usize> {
    let b = value.as_bytes();
    let len = match (b.get(4), b.get(5)) {
        (Some(b'-'), Some(b'W')) if b.get(8) == Some(&b'-') => 10,
        (Some(b'-'), Some(b'W')) => 8,
        (Some(b'-'), _) => 10,
        (Some(b'W'), _) if b.get(7).is_some_and(u8::is_ascii_digit) => 8,
        (Some(b'W'), _) => 7,
        _ => 8,
    };
    (value.len() >= len && value.is_char_boundary(len)).then_some(len)
}

fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    if !date.is_ascii() {
        return None;
    }
    let b = date.as_bytes();
    let year = i32::try_from(number(date.get(..4)?)?).ok()?;

    match (date.len(), b.get(4), b.get(5)) {
        (10, Some(b'-'), Some(b'W')) => week_date(year, &date[6..8], &date[9..10]),
        (8, Some(b'-'), Some(b'W')) => week_date(year, &date[6..8], "1"),
        (8, Some(b'W'), _) => week_date(year, &date[5..7], &date[7..8]),
        (7, Some(b'W'), _) => week_date(year, &date[5..7], "1"),
        (10, Some(b'-'), _) if b[7] == b'-' => {
            NaiveDate::from_ymd_opt(year, number(&date[5..7])?, number(&date[8..10])?)
        }
        (8, _, _) => NaiveDate::from_ymd_opt(year, number(&date[4..6])?, number(&date[6..8])?),
        _ => None,
    }
}

fn week_date(year: i32, week: &str, day: &str) -> Option<NaiveDate> {
    let weekday = match number(day)? {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    };
    NaiveDate::from_isoywd_opt(year, number(week)?, weekday)
}

fn is_iso_time(time: &str) -> bool {
    if !time.is_ascii() {
        return false;
    }
    let (clock, offset) = match time.find(|c: char| c == '+' || c == '-') {
        Some(i) => (&time[..i], Some(&time[i + 1..])),
        None => (time, None),
    };

    let Some((h, m, s)) = parse_clock(clock) else {
        return false;
    };
    if NaiveTime::from_hms_opt(h, m, s).is_none() {
        return false;
    }

    match offset {
        None => true,
        Some(offset) if matches!(offset.len(), 0 | 1 | 3) => false,
        Some(offset) => parse_clock(offset).is_some_and(|(h, m, s)| h * 3600 + m * 60 + s < 86_400),
    }
}

/// Hour, minute and second of `HH[:MM[:SS[.f]]]` or `HH[MM[SS[.f]]]`.
///
/// Minutes and seconds are not range-checked here.
fn parse_clock(clock: &str) -> Option<(u32, u32, u32)> {
    let mut parts = [0u32; 3];
    let mut rest = clock;
    let mut extended = false;

    for (i, part) in parts.iter_mut().enumerate() {
        *part = number(rest.get(..2)?)?;
        rest = &rest[2..];
        if i == 0 {
            extended = rest.starts_with(':');
        }
        if rest.is_empty() || i == 2 {
            break;
        }
        if extended {
            rest = rest.strip_prefix(':')?;
        }
    }

    if !rest.is_empty() {
        let fraction = rest.strip_prefix(|c: char| c == '.' || c == ',')?;
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let [h, m, s] = parts;
    Some((h, m, s))
}

fn number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
