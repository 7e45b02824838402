//! Reference range canonicalization.
//!
//! Range text is authored in the EHR's template editor and arrives with
//! typographic dashes, inequality glyphs, thousands separators, and the odd
//! UTF-8-read-as-Windows-1252 artifact. Everything downstream expects plain
//! lower-case ASCII.

/// UTF-8 sequences for dash and inequality glyphs decoded as Windows-1252
/// (and as Latin-1, which leaves C1 controls behind).
const MOJIBAKE: &[(&str, &str)] = &[
    // en dash
    ("\u{e2}\u{20ac}\u{201c}", "-"),
    ("\u{e2}\u{80}\u{93}", "-"),
    // em dash
    ("\u{e2}\u{20ac}\u{201d}", "-"),
    ("\u{e2}\u{80}\u{94}", "-"),
    // minus sign
    ("\u{e2}\u{2c6}\u{2019}", "-"),
    ("\u{e2}\u{88}\u{92}", "-"),
    // less-than or equal
    ("\u{e2}\u{2030}\u{a4}", "<="),
    ("\u{e2}\u{89}\u{a4}", "<="),
    // greater-than or equal
    ("\u{e2}\u{2030}\u{a5}", ">="),
    ("\u{e2}\u{89}\u{a5}", ">="),
];

/// Canonicalize a raw range string.
///
/// Unifies dash and `≤`/`≥` variants, drops commas, cuts everything from the
/// first `/` (alternate-unit annotations like `mmol/L`), drops any other
/// non-ASCII character, lower-cases and trims. Idempotent.
pub fn normalize_range(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = raw.to_string();
    for (garbled, replacement) in MOJIBAKE {
        if text.contains(garbled) {
            text = text.replace(garbled, replacement);
        }
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '/' => break,
            ',' => {}
            '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{fe58}' | '\u{fe63}' | '\u{ff0d}' => {
                out.push('-')
            }
            '\u{2264}' | '\u{2266}' => out.push_str("<="),
            '\u{2265}' | '\u{2267}' => out.push_str(">="),
            '\u{ff1c}' => out.push('<'),
            '\u{ff1e}' => out.push('>'),
            c if c.is_whitespace() => out.push(' '),
            c if c.is_ascii() => out.push(c.to_ascii_lowercase()),
            _ => {}
        }
    }

    out.trim().to_string()
}
