use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::gender::is_thousands_separator;
use super::types::RangeShape;
use crate::config::FlaggingConfig;
use crate::models::Flag;

static LESS_THAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<=?\s*([0-9]+(?:\.[0-9]+)?)").expect("valid regex"));
static GREATER_THAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">=?\s*([0-9]+(?:\.[0-9]+)?)").expect("valid regex"));
static BOUNDED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*-\s*([0-9]+(?:\.[0-9]+)?)").expect("valid regex")
});

static DEFAULT_CLASSIFIER: LazyLock<RangeClassifier> = LazyLock::new(RangeClassifier::default);

/// Classifies a result value against one reference range segment.
#[derive(Debug, Clone)]
pub struct RangeClassifier {
    qualitative_keywords: Vec<String>,
}

impl Default for RangeClassifier {
    fn default() -> Self {
        Self::new(&FlaggingConfig::default())
    }
}

impl RangeClassifier {
    pub fn new(config: &FlaggingConfig) -> Self {
        Self {
            qualitative_keywords: config.qualitative_keywords.clone(),
        }
    }

    /// Interpret a range segment. Shapes are tried in order: qualitative,
    /// less-than, greater-than, bounded. `None` when nothing matches.
    pub fn parse_range(&self, segment: &str) -> Option<RangeShape> {
        let shape = self.match_shape(&segment.to_lowercase());
        if let Some(shape) = &shape {
            tracing::trace!(shape = ?shape, "Range shape detected");
        }
        shape
    }

    fn match_shape(&self, segment: &str) -> Option<RangeShape> {
        if self
            .qualitative_keywords
            .iter()
            .any(|k| segment.contains(k.as_str()))
        {
            return Some(RangeShape::Qualitative);
        }

        if let Some(max) = LESS_THAN_RE.captures(segment).and_then(|c| capture_f64(&c, 1)) {
            return Some(RangeShape::LessThan { max });
        }

        if let Some(min) = GREATER_THAN_RE.captures(segment).and_then(|c| capture_f64(&c, 1)) {
            return Some(RangeShape::GreaterThan { min });
        }

        let caps = BOUNDED_RE.captures(segment)?;
        let (a, b) = (capture_f64(&caps, 1)?, capture_f64(&caps, 2)?);
        Some(RangeShape::Bounded {
            min: a.min(b),
            max: a.max(b),
        })
    }

    /// Flag `value` against `segment`. Total: any input yields a `Flag`.
    pub fn classify(&self, value: &str, segment: &str) -> Flag {
        let Some(value) = parse_value(value) else {
            return Flag::None;
        };
        match self.parse_range(segment) {
            Some(shape) => shape.flag_for(value),
            None => Flag::None,
        }
    }
}

impl RangeShape {
    /// Compare a numeric result against this shape.
    pub fn flag_for(&self, value: f64) -> Flag {
        match *self {
            RangeShape::Qualitative => Flag::None,
            RangeShape::LessThan { max } if value > max => Flag::High,
            RangeShape::GreaterThan { min } if value < min => Flag::Low,
            RangeShape::Bounded { min, .. } if value < min => Flag::Low,
            RangeShape::Bounded { max, .. } if value > max => Flag::High,
            _ => Flag::Normal,
        }
    }
}

/// Classify with the default qualitative keywords.
pub fn classify(value: &str, segment: &str) -> Flag {
    DEFAULT_CLASSIFIER.classify(value, segment)
}

/// Parse a range segment with the default qualitative keywords.
pub fn parse_range(segment: &str) -> Option<RangeShape> {
    DEFAULT_CLASSIFIER.parse_range(segment)
}

/// Parse a technician-entered value; the result must be a finite number.
///
/// Commas are accepted only as `d,ddd` thousands grouping (`1,200`,
/// `12,000,000.5`). Any other comma (`1,5`, `,5`, `1,2000`) is ambiguous
/// and the value is not evaluable.
pub fn parse_value(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(first) = trimmed.find(',') {
        let lead = &trimmed[..first];
        let lead = lead.strip_prefix(['+', '-']).unwrap_or(lead);
        if lead.is_empty() || lead.len() > 3 || !lead.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let bytes = trimmed.as_bytes();
        let grouped = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| *b != b',' || is_thousands_separator(bytes, i));
        if !grouped {
            return None;
        }
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn capture_f64(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}
