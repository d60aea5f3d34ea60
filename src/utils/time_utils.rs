use chrono::{DateTime, SecondsFormat, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;

    /// Day-first date format used across the UI and in prompt samples.
    pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";
}

// Time Helper functions

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse an ISO-8601 / RFC 3339 timestamp into epoch milliseconds.
pub fn parse_iso_to_ms(timestamp: &str) -> anyhow::Result<i64> {
    let dt = DateTime::parse_from_rfc3339(timestamp)?;
    Ok(dt.timestamp_millis())
}

/// Epoch millis -> ISO-8601 string, the way the wire format carries timestamps.
pub fn epoch_ms_to_iso(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Epoch millis -> "dd/mm/yyyy" for axis labels and prompt samples.
pub fn epoch_ms_to_br_date(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format(TimeUtils::BR_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_round_trip() {
        let ms = 1_700_000_000_123;
        let iso = epoch_ms_to_iso(ms);
        assert_eq!(parse_iso_to_ms(&iso).unwrap(), ms);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_iso_to_ms("not-a-timestamp").is_err());
    }

    #[test]
    fn br_date_is_day_first() {
        // 2023-11-14T22:13:20.123Z
        assert_eq!(epoch_ms_to_br_date(1_700_000_000_123), "14/11/2023");
    }
}
