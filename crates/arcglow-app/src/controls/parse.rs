/// Leading integer of `raw`: optional sign, then digits. Leading whitespace
/// and anything after the digits are ignored.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Leading integer saturated into `i32`, or `fallback` when there is none.
pub fn int_or(raw: &str, fallback: i32) -> i32 {
    parse_leading_int(raw)
        .map(|n| n.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(fallback)
}
