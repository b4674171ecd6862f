//! Tolerant parsing of free-text hour entries.
//!
//! People type "1.5", "１．５", "1.5h" or "1.5時間" and all of them should
//! count as ninety minutes; anything without a number counts as nothing.

use regex::Regex;
use std::sync::LazyLock;

static HOURS_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Extract an hour value from free text, if one is present.
///
/// Full-width digits and punctuation are folded to half-width, comma-style
/// decimal separators become a decimal point, and hour-unit suffixes
/// (`時間`, `h`/`H`, full-width variants) are ignored. The first numeric
/// token wins. Never panics.
pub fn try_parse_hours(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }

    let normalized = normalize(raw);
    let token = HOURS_TOKEN.find(&normalized)?;
    token.as_str().parse().ok()
}

/// The call-site form of the tolerant contract: unparseable input is an
/// entry of zero hours, which the completeness check then rejects.
pub fn parse_hours_or_zero(raw: &str) -> f64 {
    try_parse_hours(raw).unwrap_or(0.0)
}

fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            // Full-width digits fold to ASCII.
            '０'..='９' => {
                let digit = (c as u32 - '０' as u32) as u8;
                out.push((b'0' + digit) as char);
            }
            // Decimal-separator variants, comma included.
            '．' | '，' | '、' | ',' => out.push('.'),
            _ => out.push(c),
        }
    }

    out.replace("時間", "").replace(['h', 'H', 'ｈ', 'Ｈ'], "")
}
