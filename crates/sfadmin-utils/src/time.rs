//! Time formatting
//!
//! Two entry points:
//! - [`parse_time`] fills a `{y}-{m}-{d} {h}:{i}:{s}` style template
//! - [`format_time`] renders a relative age ("2 minutes ago") and falls back to
//!   an absolute date once the value is older than two days
//!
//! Epoch values follow the dashboard convention: a value whose decimal form is
//! exactly 10 characters long is seconds, anything else is milliseconds.

use crate::error::TimeError;
use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Template used when no format is supplied
pub const DEFAULT_FORMAT: &str = "{y}-{m}-{d} {h}:{i}:{s}";

/// Weekday names for `{a}`, indexed from Sunday
const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Layouts tried after `-` has been normalized to `/`
const NAIVE_LAYOUTS: [&str; 3] = ["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M", "%Y/%m/%dT%H:%M:%S"];

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([ymdhisa])+\}").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// A time value as it arrives from the API or a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    /// An already-resolved instant
    Instant(DateTime<Utc>),
    /// Epoch seconds (10 digits) or milliseconds
    Epoch(i64),
    /// Numeric epoch text or a date string such as `2019-01-23 10:30:00`
    Text(String),
}

impl TimeInput {
    /// Zero and empty text count as "no value"
    pub fn is_empty(&self) -> bool {
        match self {
            TimeInput::Epoch(n) => *n == 0,
            TimeInput::Text(s) => s.is_empty(),
            TimeInput::Instant(_) => false,
        }
    }
}

impl From<i64> for TimeInput {
    fn from(value: i64) -> Self {
        TimeInput::Epoch(value)
    }
}

impl From<&str> for TimeInput {
    fn from(value: &str) -> Self {
        TimeInput::Text(value.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(value: String) -> Self {
        TimeInput::Text(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeInput {
    fn from(value: DateTime<Tz>) -> Self {
        TimeInput::Instant(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for TimeInput {
    /// Naive values are taken as UTC
    fn from(value: NaiveDateTime) -> Self {
        TimeInput::Instant(Utc.from_utc_datetime(&value))
    }
}

/// Language used for relative-time labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    fn just_now(self) -> &'static str {
        match self {
            Locale::ZhCn => "刚刚",
            Locale::En => "just now",
        }
    }

    fn minutes_ago(self, n: i64) -> String {
        match self {
            Locale::ZhCn => format!("{}分钟前", n),
            Locale::En => format!("{} minutes ago", n),
        }
    }

    fn hours_ago(self, n: i64) -> String {
        match self {
            Locale::ZhCn => format!("{}小时前", n),
            Locale::En => format!("{} hours ago", n),
        }
    }

    fn one_day_ago(self) -> &'static str {
        match self {
            Locale::ZhCn => "1天前",
            Locale::En => "1 day ago",
        }
    }
}

/// Formats `time` with a placeholder template in the local time zone
///
/// Returns `Ok(None)` when no value is given, or when the value is `0` or an
/// empty string.
///
/// # Examples
///
/// ```
/// use sfadmin_utils::parse_time;
///
/// assert_eq!(parse_time(None, None), Ok(None));
/// ```
pub fn parse_time(time: Option<TimeInput>, format: Option<&str>) -> Result<Option<String>, TimeError> {
    parse_time_in(time, format, &Local)
}

/// Same as [`parse_time`] but renders in the given time zone
///
/// Supported placeholders: `{y}` year, `{m}` month, `{d}` day, `{h}` hour,
/// `{i}` minute, `{s}` second, `{a}` weekday. Numeric fields are zero-padded
/// to two digits.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use sfadmin_utils::{parse_time_in, TimeInput};
///
/// let formatted = parse_time_in(Some(TimeInput::Epoch(1548221490)), Some("{y}/{m}/{d} 周{a}"), &Utc);
/// assert_eq!(formatted, Ok(Some("2019/01/23 周三".to_string())));
/// ```
pub fn parse_time_in<Tz: TimeZone>(
    time: Option<TimeInput>,
    format: Option<&str>,
    tz: &Tz,
) -> Result<Option<String>, TimeError> {
    let Some(time) = time.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let format = format.filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FORMAT);
    let instant = resolve_instant(&time, tz)?;

    Ok(Some(render_template(&instant.with_timezone(tz), format)))
}

/// Describes how long ago `time` was, relative to the current wall clock
///
/// Uses the local time zone and the default locale. See [`format_time_at`].
pub fn format_time(time: TimeInput, option: Option<&str>) -> Result<String, TimeError> {
    format_time_at(time, option, Utc::now(), &Local, Locale::default())
}

/// Describes how long ago `time` was, relative to `now`
///
/// - under 30 seconds: "just now"
/// - under an hour: minutes, rounded up
/// - under a day: hours, rounded up
/// - under two days: "1 day ago"
/// - otherwise `option` is used as a [`parse_time`] template, or the fixed
///   `<month>月<day>日<hour>时<minute>分` form when no template is given
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use sfadmin_utils::{format_time_at, Locale, TimeInput};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
/// let then = TimeInput::from(now - Duration::seconds(90));
/// assert_eq!(format_time_at(then, None, now, &Utc, Locale::En).unwrap(), "2 minutes ago");
/// ```
pub fn format_time_at<Tz: TimeZone>(
    time: TimeInput,
    option: Option<&str>,
    now: DateTime<Utc>,
    tz: &Tz,
    locale: Locale,
) -> Result<String, TimeError> {
    let instant = relative_instant(&time)?;
    let diff = (now - instant).num_milliseconds() as f64 / 1000.0;

    if diff < 30.0 {
        return Ok(locale.just_now().to_string());
    } else if diff < 3600.0 {
        return Ok(locale.minutes_ago((diff / 60.0).ceil() as i64));
    } else if diff < 3600.0 * 24.0 {
        return Ok(locale.hours_ago((diff / 3600.0).ceil() as i64));
    } else if diff < 3600.0 * 24.0 * 2.0 {
        return Ok(locale.one_day_ago().to_string());
    }

    let local = instant.with_timezone(tz);
    match option.filter(|f| !f.is_empty()) {
        Some(template) => Ok(render_template(&local, template)),
        None => Ok(format!(
            "{}月{}日{}时{}分",
            local.month(),
            local.day(),
            local.hour(),
            local.minute()
        )),
    }
}

fn render_template<Tz: TimeZone>(date: &DateTime<Tz>, template: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "y" => format!("{:02}", date.year()),
            "m" => format!("{:02}", date.month()),
            "d" => format!("{:02}", date.day()),
            "h" => format!("{:02}", date.hour()),
            "i" => format!("{:02}", date.minute()),
            "s" => format!("{:02}", date.second()),
            "a" => WEEKDAYS[date.weekday().num_days_from_sunday() as usize].to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

fn resolve_instant<Tz: TimeZone>(time: &TimeInput, tz: &Tz) -> Result<DateTime<Utc>, TimeError> {
    match time {
        TimeInput::Instant(instant) => Ok(*instant),
        TimeInput::Epoch(value) => from_epoch(*value),
        TimeInput::Text(text) if NUMERIC_REGEX.is_match(text) => {
            let value = text
                .parse::<i64>()
                .map_err(|_| TimeError::OutOfRange(text.clone()))?;
            from_epoch(value)
        }
        TimeInput::Text(text) => parse_date_text(text, tz),
    }
}

/// Normalization used by [`format_time_at`]: the 10-character rule is applied
/// to the text as given, so `"0000001234"` is seconds.
fn relative_instant(time: &TimeInput) -> Result<DateTime<Utc>, TimeError> {
    match time {
        TimeInput::Instant(instant) => Ok(*instant),
        TimeInput::Epoch(value) => from_epoch(*value),
        TimeInput::Text(text) => {
            let value = text
                .trim()
                .parse::<i64>()
                .map_err(|_| TimeError::Unparseable(text.clone()))?;
            let millis = if text.chars().count() == 10 {
                value
                    .checked_mul(1000)
                    .ok_or_else(|| TimeError::OutOfRange(text.clone()))?
            } else {
                value
            };
            from_millis(millis)
        }
    }
}

fn from_epoch(value: i64) -> Result<DateTime<Utc>, TimeError> {
    let millis = if value.to_string().len() == 10 {
        value
            .checked_mul(1000)
            .ok_or_else(|| TimeError::OutOfRange(value.to_string()))?
    } else {
        value
    };
    from_millis(millis)
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, TimeError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| TimeError::OutOfRange(millis.to_string()))
}

fn parse_date_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<DateTime<Utc>, TimeError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }

    let normalized = text.replace('-', "/");
    let naive = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(&normalized, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, "%Y/%m/%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| TimeError::Unparseable(text.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| TimeError::NonexistentLocalTime(text.to_string()))
}
