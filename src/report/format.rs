//! Display formatting for keyword metrics.
//!
//! Every function here is total: malformed or missing input renders as an
//! empty string (or `None`) instead of an error, since the API gives no
//! guarantee about which fields are present or what type they carry.

use chrono::{DateTime, Utc};
use num_format::Locale;
use serde_json::Value;

pub const CURRENCY_PREFIX: &str = "R$";

const SECONDS_PER_DAY: i64 = 86_400;

/// Search intent code to display letter.
pub fn intent_letter(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("I"), // informational
        2 => Some("N"), // navigational
        3 => Some("C"), // commercial
        4 => Some("T"), // transactional
        _ => None,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `1500` -> `"1,5k"`, `999` -> `"999"`.
pub fn format_volume(value: Option<&Value>) -> String {
    let Some(volume) = value.and_then(as_integer) else {
        return String::new();
    };
    if volume >= 1000 {
        let thousands = format!("{:.1}", volume as f64 / 1000.0);
        format!("{}k", thousands.replace('.', Locale::pt.decimal()))
    } else {
        volume.to_string()
    }
}

/// `1234.5` -> `"R$1.234,50"`.
pub fn format_cpc(value: Option<&Value>) -> String {
    let Some(cpc) = value.and_then(as_decimal).filter(|f| f.is_finite()) else {
        return String::new();
    };

    let fixed = format!("{:.2}", cpc.abs());
    let Some((units, cents)) = fixed.split_once('.') else {
        return String::new();
    };
    if !units.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }

    let sign = if cpc.is_sign_negative() { "-" } else { "" };
    format!(
        "{CURRENCY_PREFIX}{sign}{}{}{cents}",
        group_digits(units, Locale::pt.separator()),
        Locale::pt.decimal()
    )
}

/// `"1234567"` -> `"1.234.567"` for separator `"."`. Expects ASCII digits.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

/// Integer intent code; integral floats such as `3.0` count as their integer.
fn intent_code(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// Maps intent codes to letters, first occurrence wins, unknown codes are
/// dropped: `[3, 4, 3, 1]` -> `"C T I"`.
pub fn format_intent(value: Option<&Value>) -> String {
    let Some(codes) = value.and_then(Value::as_array) else {
        return String::new();
    };

    let mut letters: Vec<&str> = Vec::new();
    for letter in codes.iter().filter_map(intent_code).filter_map(intent_letter) {
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    letters.join(" ")
}

/// Difficulty scores print verbatim whenever present, zero included.
pub fn format_score(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn humanize_timestamp(value: Option<&Value>) -> String {
    humanize_timestamp_at(value, Utc::now())
}

/// Relative age of a Unix timestamp (seconds) against `now`.
///
/// Weeks and months are fixed 7 and 30 day buckets of the elapsed days,
/// not calendar arithmetic.
pub fn humanize_timestamp_at(value: Option<&Value>, now: DateTime<Utc>) -> String {
    let Some(ts) = value.and_then(as_integer).filter(|ts| *ts != 0) else {
        return String::new();
    };
    let Some(then) = DateTime::from_timestamp(ts, 0) else {
        return String::new();
    };

    let days = (now - then).num_seconds().div_euclid(SECONDS_PER_DAY);
    if days < 1 {
        return "Today".to_string();
    }
    if days == 1 {
        return "1 day ago".to_string();
    }
    if days < 7 {
        return format!("{days} days ago");
    }

    let weeks = days / 7;
    if weeks == 1 {
        return "1 week ago".to_string();
    }
    if weeks < 8 {
        return format!("{weeks} weeks ago");
    }

    let months = days / 30;
    if months == 1 {
        return "1 month ago".to_string();
    }
    if months < 12 {
        return format!("{months} months ago");
    }
    "more than 1 year ago".to_string()
}
