//! Scroll reveal for story content.

/// Elements revealed the first time they scroll into view.
pub const REVEAL_SELECTOR: &str =
    ".story-line, .feature-card, .character-item, .section-title, .warning-text";

/// Parse a `data-delay` attribute the way `parseInt` would: optional leading
/// whitespace and sign, then as many digits as present. Anything unparsable
/// or negative means no delay.
pub fn parse_delay_ms(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(u32::MAX)
}
