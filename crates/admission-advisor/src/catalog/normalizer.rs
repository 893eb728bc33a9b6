use regex::Regex;
use std::sync::OnceLock;

static FIRST_INTEGER: OnceLock<Regex> = OnceLock::new();

/// Descriptor words that trail threshold cells such as "40%-ზე მეტი".
const THRESHOLD_DESCRIPTORS: &[&str] = &["ზე", "მეტი", "ნაკლები"];

pub(crate) fn normalize_exam_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops a trailing parenthetical annotation: "უცხოური ენა (ინგ.)" -> "უცხოური ენა".
pub(crate) fn strip_annotation(value: &str) -> &str {
    match value.find('(') {
        Some(index) => value[..index].trim_end(),
        None => value.trim(),
    }
}

/// True for stray cells that landed in a name column: bare numbers, percentages, thresholds.
pub(crate) fn is_data_artifact(value: &str) -> bool {
    let mut remainder = value.to_string();
    for descriptor in THRESHOLD_DESCRIPTORS {
        remainder = remainder.replace(descriptor, "");
    }

    remainder
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_punctuation() || c.is_whitespace())
}

/// First embedded integer of a threshold cell, clamped to a percentage.
pub(crate) fn parse_minimum(value: &str) -> Option<f64> {
    let pattern = FIRST_INTEGER.get_or_init(|| Regex::new(r"[0-9]+").expect("valid pattern"));
    pattern
        .find(value)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .map(|minimum| minimum.clamp(0.0, 100.0))
}

pub(crate) fn parse_decimal(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Whole, non-negative counts; tolerates float exports such as "60.0".
pub(crate) fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if let Ok(count) = trimmed.parse::<u32>() {
        return Some(count);
    }

    parse_decimal(trimmed)
        .filter(|number| *number >= 0.0 && number.fract() == 0.0 && *number <= u32::MAX as f64)
        .map(|number| number as u32)
}
