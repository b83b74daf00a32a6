use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a money argument.
pub fn parse_amount(raw: &str, field: &str) -> anyhow::Result<Decimal> {
    raw.parse::<Decimal>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a timestamp argument: RFC 3339, or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use gly_core::enums::{ProjectStatus, ProjectType};

    use super::{parse_amount, parse_enum, parse_timestamp};

    #[test]
    fn parses_snake_case_enum() {
        let status: ProjectStatus = parse_enum("quoted", "status").expect("status should parse");
        assert_eq!(status, ProjectStatus::Quoted);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let project_type: ProjectType =
            parse_enum("quick-fix", "type").expect("type should parse");
        assert_eq!(project_type, ProjectType::QuickFix);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<ProjectStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(
            parse_amount("450.50", "quoted").unwrap(),
            rust_decimal::Decimal::new(45_050, 2)
        );
        assert!(parse_amount("a lot", "quoted").is_err());
    }

    #[test]
    fn parses_bare_dates_and_rfc3339() {
        let bare = parse_timestamp("2026-03-15", "deadline").unwrap();
        assert_eq!(bare.to_rfc3339(), "2026-03-15T00:00:00+00:00");

        let full = parse_timestamp("2026-03-15T17:30:00+00:00", "deadline").unwrap();
        assert!(full > bare);

        assert!(parse_timestamp("soon", "deadline").is_err());
    }
}
