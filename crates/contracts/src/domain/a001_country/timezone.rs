use chrono::{DateTime, FixedOffset, Utc};

/// Parses upstream timezone labels such as `UTC`, `UTC+05:30` or `UTC-10:00`.
pub fn parse_utc_offset(label: &str) -> Option<FixedOffset> {
    let rest = label.trim().strip_prefix("UTC")?;
    if rest.is_empty() {
        return FixedOffset::east_opt(0);
    }

    let (sign, digits) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (parse_unsigned(h)?, parse_unsigned(m)?),
        None => (parse_unsigned(digits)?, 0),
    };
    if hours > 23 || minutes >= 60 {
        return None;
    }
    let seconds = hours.checked_mul(3600)?.checked_add(minutes.checked_mul(60)?)?;
    FixedOffset::east_opt(sign * seconds)
}

/// Bare digits only; `i32::from_str` would also take a leading sign.
fn parse_unsigned(part: &str) -> Option<i32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Shown in place of the timezone list when upstream reports none.
pub const NO_TIMEZONE_DATA: &str = "No timezone data available";

/// One entry of the detail page's timezone list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneRow {
    pub label: String,
    pub local_time: Option<String>,
}

/// Wall-clock time (`HH:MM`) at the given timezone label, if it is a fixed offset.
pub fn local_time_label(label: &str, now: DateTime<Utc>) -> Option<String> {
    let offset = parse_utc_offset(label)?;
    Some(now.with_timezone(&offset).format("%H:%M").to_string())
}

/// Rows for `labels` in upstream order, each with its current local time.
pub fn timezone_rows(labels: &[String], now: DateTime<Utc>) -> Vec<TimezoneRow> {
    labels
        .iter()
        .map(|label| TimezoneRow {
            label: label.clone(),
            local_time: local_time_label(label, now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_offsets() {
        assert_eq!(parse_utc_offset("UTC"), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset("UTC+01:00"), FixedOffset::east_opt(3600));
        assert_eq!(parse_utc_offset("UTC+05:30"), FixedOffset::east_opt(19800));
        assert_eq!(parse_utc_offset("UTC-10:00"), FixedOffset::west_opt(36000));
    }

    #[test]
    fn test_rejects_non_offsets() {
        assert_eq!(parse_utc_offset("Europe/Paris"), None);
        assert_eq!(parse_utc_offset("UTC+1:75"), None);
        assert_eq!(parse_utc_offset("UTC*01:00"), None);
    }

    #[test]
    fn test_rejects_out_of_range_parts() {
        assert_eq!(parse_utc_offset("UTC+9999999:00"), None);
        assert_eq!(parse_utc_offset("UTC+24:00"), None);
        assert_eq!(parse_utc_offset("UTC+05:-30"), None);
        assert_eq!(parse_utc_offset("UTC+-05:00"), None);
        assert_eq!(parse_utc_offset("UTC+05:"), None);
        assert_eq!(parse_utc_offset("UTC+23:59"), FixedOffset::east_opt(86_340));
    }

    #[test]
    fn test_local_time_label() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(local_time_label("UTC+05:30", now).as_deref(), Some("17:30"));
        assert_eq!(local_time_label("UTC-10:00", now).as_deref(), Some("02:00"));
        assert_eq!(local_time_label("nowhere", now), None);
    }

    #[test]
    fn test_timezone_rows() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert!(timezone_rows(&[], now).is_empty());

        let labels = vec!["UTC+01:00".to_string(), "Europe/Paris".to_string()];
        let rows = timezone_rows(&labels, now);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "UTC+01:00");
        assert_eq!(rows[0].local_time.as_deref(), Some("13:00"));
        assert_eq!(rows[1].local_time, None);
    }
}
