use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Name reported by `GET /`.
pub const SERVICE_NAME: &str = "user-management-placeholder";

/// Body of `GET /`.
///
/// Field order is part of the wire format: `status`, `service`, `env`,
/// `timestamp`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub env: String,
    pub timestamp: String,
}

impl StatusResponse {
    pub fn new(env: &str, now: DateTime<Utc>) -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            env: env.to_string(),
            timestamp: format_timestamp(now),
        }
    }
}

/// ISO-8601 UTC with microsecond precision and a trailing `Z`,
/// e.g. `2024-01-01T00:00:00.000000Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_keeps_six_fractional_digits() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(midnight), "2024-01-01T00:00:00.000000Z");

        let later = Utc
            .with_ymd_and_hms(2024, 6, 30, 23, 59, 59)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(123_456))
            .unwrap();
        assert_eq!(format_timestamp(later), "2024-06-30T23:59:59.123456Z");
    }

    #[test]
    fn serializes_fields_in_wire_order() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let body = serde_json::to_string(&StatusResponse::new("local", midnight)).unwrap();
        assert_eq!(
            body,
            r#"{"status":"ok","service":"user-management-placeholder","env":"local","timestamp":"2024-01-01T00:00:00.000000Z"}"#
        );
    }

    #[test]
    fn timestamp_round_trips_through_rfc3339_parser() {
        let now = Utc::now();
        let parsed = DateTime::parse_from_rfc3339(&format_timestamp(now)).unwrap();
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }
}
