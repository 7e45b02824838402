//! Sex-scoped range selection.
//!
//! Templates encode per-sex ranges as `Male: 13-17, Female: 12-15`. This runs
//! on the raw template text, before normalization strips the commas that
//! separate the segments.

use std::sync::LazyLock;

use regex::{Match, Regex};

use crate::models::Sex;

/// `male:` / `female:` labels. The word boundary keeps `male:` from
/// matching inside `female:`.
static SEX_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:female|male)\s*:").expect("valid regex"));

/// Return the sub-range for `sex`, or `range` unchanged when there is no
/// sex, no matching label, or the labelled segment is blank.
///
/// A segment runs from its label to the next segment delimiter (`,` `;` `|`
/// newline) or the next sex label, whichever comes first. A comma between
/// digit groups (`150,000`) is a thousands separator, not a delimiter.
pub fn extract_segment(range: &str, sex: Option<Sex>) -> &str {
    let Some(sex) = sex else {
        return range;
    };

    let labels: Vec<(Sex, Match<'_>)> = SEX_LABEL_RE
        .find_iter(range)
        .map(|m| (label_sex(m.as_str()), m))
        .collect();

    let Some(idx) = labels.iter().position(|(label, _)| *label == sex) else {
        return range;
    };

    let start = labels[idx].1.end();
    let next_label = labels
        .get(idx + 1)
        .map(|(_, m)| m.start())
        .unwrap_or(range.len());
    let body = &range[start..next_label];
    let end = find_delimiter(body).unwrap_or(body.len());

    let segment = body[..end].trim();
    if segment.is_empty() {
        return range;
    }
    segment
}

fn label_sex(label: &str) -> Sex {
    if label.to_ascii_lowercase().starts_with("female") {
        Sex::Female
    } else {
        Sex::Male
    }
}

fn find_delimiter(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    bytes.iter().enumerate().find_map(|(i, b)| match b {
        b';' | b'|' | b'\n' => Some(i),
        b',' if !is_thousands_separator(bytes, i) => Some(i),
        _ => None,
    })
}

/// `d,ddd` where the group after the comma is exactly three digits.
pub(super) fn is_thousands_separator(bytes: &[u8], comma: usize) -> bool {
    let digit_before = comma > 0 && bytes[comma - 1].is_ascii_digit();
    let group = &bytes[comma + 1..];
    let digits_after = group.iter().take_while(|b| b.is_ascii_digit()).count();
    digit_before && digits_after == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sex_returns_input_unchanged() {
        let range = "Male: 13-17, Female: 12-15";
        assert_eq!(extract_segment(range, None), range);
    }

    #[test]
    fn unscoped_range_returns_input_unchanged() {
        assert_eq!(extract_segment(" 70-99 ", Some(Sex::Male)), " 70-99 ");
        assert_eq!(extract_segment("Negative", Some(Sex::Female)), "Negative");
    }

    #[test]
    fn selects_male_segment() {
        assert_eq!(
            extract_segment("Male: 13-17, Female: 12-15", Some(Sex::Male)),
            "13-17"
        );
    }

    #[test]
    fn selects_female_segment() {
        assert_eq!(
            extract_segment("Male: 13-17, Female: 12-15", Some(Sex::Female)),
            "12-15"
        );
    }

    #[test]
    fn male_label_not_found_inside_female() {
        assert_eq!(extract_segment("Female: 12-15", Some(Sex::Male)), "Female: 12-15");
        assert_eq!(
            extract_segment("Female: 12-15; Male: 13-17", Some(Sex::Male)),
            "13-17"
        );
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(
            extract_segment("MALE : 0.7-1.3 | FEMALE : 0.6-1.1", Some(Sex::Female)),
            "0.6-1.1"
        );
    }

    #[test]
    fn next_label_terminates_without_delimiter() {
        let normalized = "male: 13-17 female: 12-15";
        assert_eq!(extract_segment(normalized, Some(Sex::Male)), "13-17");
        assert_eq!(extract_segment(normalized, Some(Sex::Female)), "12-15");
    }

    #[test]
    fn newline_separated_segments() {
        let range = "Male: 40-50\nFemale: 36-46";
        assert_eq!(extract_segment(range, Some(Sex::Female)), "36-46");
        assert_eq!(extract_segment(range, Some(Sex::Male)), "40-50");
    }

    #[test]
    fn thousands_separator_is_not_a_delimiter() {
        let range = "Male: 150,000-400,000, Female: 170,000-450,000";
        assert_eq!(extract_segment(range, Some(Sex::Male)), "150,000-400,000");
        assert_eq!(extract_segment(range, Some(Sex::Female)), "170,000-450,000");
    }

    #[test]
    fn blank_segment_falls_back_to_full_range() {
        let range = "Male: , Female: 12-15";
        assert_eq!(extract_segment(range, Some(Sex::Male)), range);
    }

    #[test]
    fn only_other_sex_present_falls_back() {
        let range = "Male: 13-17";
        assert_eq!(extract_segment(range, Some(Sex::Female)), range);
    }
}
