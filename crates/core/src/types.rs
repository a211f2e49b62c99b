/// Review timestamps carry no zone; they are compared as wall-clock instants.
pub type Instant = chrono::NaiveDateTime;

/// Timestamp layouts accepted for `submittedAt` and date-range bounds,
/// tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp string into an [`Instant`].
///
/// Accepts `YYYY-MM-DD HH:MM:SS` (the providers' format), the `T`-separated
/// variant, RFC 3339 (the offset is dropped after conversion to UTC), and a
/// bare `YYYY-MM-DD` date, which maps to midnight.
pub fn parse_instant(raw: &str) -> Option<Instant> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
