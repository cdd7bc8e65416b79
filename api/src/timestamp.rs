use chrono::{DateTime, Utc};

/// The `created_at` wire format, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
pub const CREATED_AT_FMT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parses a `created_at` value.
///
/// This is a stateless function; unlike a shared formatter instance it needs
/// no synchronization across concurrent mappings.
pub fn parse(input: &str) -> Result<DateTime<Utc>, chrono::format::ParseError> {
    Ok(DateTime::parse_from_str(input, CREATED_AT_FMT)?.with_timezone(&Utc))
}

/// Parses a `created_at` value, substituting the current wall-clock time when
/// the field is absent or unparseable.
///
/// The substitution is a soft failure: it is logged and never surfaced to the
/// caller, so a tweet with a mangled date still maps successfully.
pub fn parse_or_now(input: Option<&str>) -> DateTime<Utc> {
    match input {
        Some(value) => parse(value).unwrap_or_else(|error| {
            log::warn!("Unparseable created_at {:?}: {}", value, error);
            Utc::now()
        }),
        None => {
            log::warn!("Missing created_at");
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    #[test]
    fn parse_wire_format() {
        let parsed = super::parse("Wed Oct 10 20:19:24 +0000 2018").unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 10, 10, 20, 19, 24).unwrap();

        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_non_utc_offset() {
        let parsed = super::parse("Wed Oct 10 20:19:24 +0200 2018").unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 10, 10, 18, 19, 24).unwrap();

        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_or_now_absent() {
        let before = Utc::now();
        let parsed = super::parse_or_now(None);
        let after = Utc::now();

        assert!(parsed >= before && parsed <= after);
    }

    #[test]
    fn parse_or_now_mangled() {
        let before = Utc::now();
        let parsed = super::parse_or_now(Some("not a date"));
        let after = Utc::now();

        assert!(parsed >= before && parsed <= after);
    }

    quickcheck::quickcheck! {
        fn round_trip_created_at(seconds: u32) -> bool {
            let timestamp = DateTime::from_timestamp(seconds as i64, 0).unwrap();
            let formatted = timestamp.format(super::CREATED_AT_FMT).to_string();

            super::parse(&formatted).unwrap() == timestamp
        }
    }
}
