//! Line classifier for report documents.
//!
//! Precedence, first match wins, applied to the trimmed line:
//!
//! 1. contains `PROGRESS REPORT` → [`Block::Title`]
//! 2. starts with a metadata key (`PROJECT NAME:`, `REPORTING PERIOD:`,
//!    `REPORT DATE:`) → [`Block::MetadataPair`]
//! 3. `<digits>. <UPPERCASE WORDS>` → [`Block::SectionHeader`]
//! 4. starts with `- ` → [`Block::Bullet`]
//! 5. anything else, blank lines included → [`Block::Paragraph`]

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use super::block::{Block, DateValue, MetadataValue, METADATA_PREFIXES, REPORTING_PERIOD_KEY};

const TITLE_MARKER: &str = "PROGRESS REPORT";
const BULLET_PREFIX: &str = "- ";
const PERIOD_SEPARATOR: &str = "TO";

// ASCII digits, then uppercase ASCII letters and spaces only.
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\. [A-Z ]+$").expect("section header pattern is valid"));

static PERIOD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bTO\b").expect("period token pattern is valid"));

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

/// Classifies a single line. Total: every input yields exactly one block.
pub fn classify(line: &str) -> Block {
    let line = line.trim();

    if line.contains(TITLE_MARKER) {
        return Block::Title {
            text: line.to_string(),
        };
    }

    if METADATA_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return classify_metadata(line);
    }

    if let Some(caps) = SECTION_HEADER.captures(line) {
        return Block::SectionHeader {
            number: caps[1].to_string(),
            text: line.to_string(),
        };
    }

    if let Some(rest) = line.strip_prefix(BULLET_PREFIX) {
        return Block::Bullet {
            text: rest.to_string(),
        };
    }

    Block::Paragraph {
        text: line.to_string(),
    }
}

fn classify_metadata(line: &str) -> Block {
    // Prefix match guarantees a colon.
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    let key = key.trim();
    let value = value.trim();

    let value = if key == REPORTING_PERIOD_KEY {
        match split_period(value) {
            Some((start, end)) => MetadataValue::Period {
                start: parse_date(start),
                end: parse_date(end),
            },
            None => MetadataValue::text(value),
        }
    } else {
        MetadataValue::text(value)
    };

    Block::MetadataPair {
        key: key.to_string(),
        value,
    }
}

/// Splits `<start> TO <end>`.
///
/// A word-bounded `TO` wins so month names such as `OCTOBER` are left
/// alone; a bare `TO` is used only when no bounded one exists.
fn split_period(value: &str) -> Option<(&str, &str)> {
    let (start, end) = match PERIOD_TOKEN.find(value) {
        Some(m) => (&value[..m.start()], &value[m.end()..]),
        None => value.split_once(PERIOD_SEPARATOR)?,
    };
    Some((start.trim(), end.trim()))
}

/// Reads a calendar date, falling back to the raw text.
pub fn parse_date(raw: &str) -> DateValue {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return DateValue::Date(dt.date_naive());
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return DateValue::Date(date);
        }
    }
    DateValue::Raw(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::BlockKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn title_line_is_title() {
        assert_eq!(
            classify("PROJECT PROGRESS REPORT"),
            Block::Title {
                text: "PROJECT PROGRESS REPORT".to_string()
            }
        );
    }

    #[test]
    fn title_takes_precedence_over_bullet() {
        let block = classify("- PROGRESS REPORT highlights");
        assert_eq!(block.kind(), BlockKind::Title);
    }

    #[test]
    fn title_takes_precedence_over_metadata() {
        let block = classify("PROJECT NAME: Weekly PROGRESS REPORT");
        assert_eq!(block.kind(), BlockKind::Title);
    }

    #[test]
    fn project_name_splits_into_key_and_value() {
        assert_eq!(
            classify("PROJECT NAME: Acme Corp"),
            Block::MetadataPair {
                key: "PROJECT NAME".to_string(),
                value: MetadataValue::text("Acme Corp"),
            }
        );
    }

    #[test]
    fn metadata_value_keeps_later_colons() {
        let block = classify("REPORT DATE: 2024-02-01 10:30");
        assert_eq!(
            block,
            Block::MetadataPair {
                key: "REPORT DATE".to_string(),
                value: MetadataValue::text("2024-02-01 10:30"),
            }
        );
    }

    #[test]
    fn reporting_period_splits_into_ordered_dates() {
        let block = classify("REPORTING PERIOD: 2024-01-01 TO 2024-01-31");
        let Block::MetadataPair {
            key,
            value: MetadataValue::Period { start, end },
        } = block
        else {
            panic!("expected period metadata");
        };
        assert_eq!(key, "REPORTING PERIOD");
        let (start, end) = (start.as_date().unwrap(), end.as_date().unwrap());
        assert_eq!(start, date(2024, 1, 1));
        assert_eq!(end, date(2024, 1, 31));
        assert!(start <= end);
    }

    #[test]
    fn reporting_period_with_month_names_splits_on_delimited_token() {
        let block = classify("REPORTING PERIOD: October 1, 2024 TO October 31, 2024");
        let Block::MetadataPair {
            value: MetadataValue::Period { start, end },
            ..
        } = block
        else {
            panic!("expected period metadata");
        };
        assert_eq!(start.as_date(), Some(date(2024, 10, 1)));
        assert_eq!(end.as_date(), Some(date(2024, 10, 31)));
    }

    #[test]
    fn malformed_period_dates_survive_as_raw_strings() {
        let block = classify("REPORTING PERIOD: last week TO 2024-13-45");
        let Block::MetadataPair {
            value: MetadataValue::Period { start, end },
            ..
        } = block
        else {
            panic!("expected period metadata");
        };
        assert_eq!(start, DateValue::Raw("last week".to_string()));
        assert_eq!(end, DateValue::Raw("2024-13-45".to_string()));
    }

    #[test]
    fn reporting_period_without_separator_stays_text() {
        let block = classify("REPORTING PERIOD: Q1");
        assert_eq!(
            block,
            Block::MetadataPair {
                key: "REPORTING PERIOD".to_string(),
                value: MetadataValue::text("Q1"),
            }
        );
    }

    #[test]
    fn uppercase_numbered_line_is_section_header() {
        assert_eq!(
            classify("2. PROJECT PROGRESS"),
            Block::SectionHeader {
                number: "2".to_string(),
                text: "2. PROJECT PROGRESS".to_string(),
            }
        );
    }

    #[test]
    fn multi_digit_section_numbers_are_captured() {
        let block = classify("12. NEXT STEPS");
        assert!(matches!(block, Block::SectionHeader { ref number, .. } if number == "12"));
    }

    #[test]
    fn mixed_case_numbered_line_is_paragraph() {
        assert_eq!(
            classify("2. Project Progress"),
            Block::Paragraph {
                text: "2. Project Progress".to_string()
            }
        );
    }

    #[test]
    fn non_ascii_digits_do_not_number_a_section() {
        assert_eq!(classify("١. SUMMARY").kind(), BlockKind::Paragraph);
        assert_eq!(classify("３. RISKS").kind(), BlockKind::Paragraph);
    }

    #[test]
    fn punctuation_in_header_falls_through() {
        assert_eq!(classify("3. RISKS & ISSUES").kind(), BlockKind::Paragraph);
    }

    #[test]
    fn bullet_strips_exactly_two_characters() {
        assert_eq!(
            classify("- Improved onboarding flow"),
            Block::Bullet {
                text: "Improved onboarding flow".to_string()
            }
        );
        assert_eq!(
            classify("-  indented"),
            Block::Bullet {
                text: " indented".to_string()
            }
        );
    }

    #[test]
    fn dash_without_space_is_paragraph() {
        assert_eq!(classify("-no space").kind(), BlockKind::Paragraph);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            classify("   - padded item\r"),
            Block::Bullet {
                text: "padded item".to_string()
            }
        );
    }

    #[test]
    fn blank_line_is_empty_paragraph() {
        assert!(classify("").is_blank());
        assert!(classify("    ").is_blank());
    }

    #[test]
    fn parse_date_accepts_common_formats() {
        assert_eq!(parse_date("2024-03-05").as_date(), Some(date(2024, 3, 5)));
        assert_eq!(parse_date("03/05/2024").as_date(), Some(date(2024, 3, 5)));
        assert_eq!(parse_date("March 5, 2024").as_date(), Some(date(2024, 3, 5)));
        assert_eq!(
            parse_date("2024-03-05T10:00:00Z").as_date(),
            Some(date(2024, 3, 5))
        );
    }
}
