//! Duration utilities: parsing `H:M:S` strings and minute rounding.

/// Parse `H:M:S` into seconds. Segments are plain integers and are not
/// bounded (`36:90:00` is valid). Returns `None` when the text does not
/// have exactly three integer segments.
pub fn try_parse_duration(s: &str) -> Option<i64> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let h: i64 = parts[0].trim().parse().ok()?;
    let m: i64 = parts[1].trim().parse().ok()?;
    let sec: i64 = parts[2].trim().parse().ok()?;

    h.checked_mul(3600)?
        .checked_add(m.checked_mul(60)?)?
        .checked_add(sec)
}

/// Lenient variant: malformed input counts as zero seconds.
pub fn parse_duration_to_seconds(s: &str) -> i64 {
    try_parse_duration(s).unwrap_or(0)
}

/// Round to the nearest whole minute. Ties (exactly 30 s) go to the even
/// minute: 30 s -> 0, 90 s -> 120 s, 150 s -> 120 s.
pub fn round_to_nearest_minute(seconds: i64) -> i64 {
    let minutes = seconds.div_euclid(60);
    let rest = seconds.rem_euclid(60);

    let rounded = match rest.cmp(&30) {
        std::cmp::Ordering::Less => minutes,
        std::cmp::Ordering::Greater => minutes + 1,
        std::cmp::Ordering::Equal => {
            if minutes % 2 == 0 {
                minutes
            } else {
                minutes + 1
            }
        }
    };

    rounded.saturating_mul(60)
}
