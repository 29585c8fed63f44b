use std::fmt::Display;

use chrono::{Local, NaiveDateTime, Timelike};

/// A naive local instant rendered as ISO-8601 text, e.g. `2023-06-01T00:00:00`
/// or `2023-06-01T12:30:45.123456`. Sub-second precision is truncated to
/// microseconds and omitted entirely when zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn now() -> Timestamp {
        Timestamp::from(Local::now().naive_local())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        let micros = datetime.nanosecond() % 1_000_000_000 / 1_000;
        let rendered = if micros == 0 {
            datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            format!("{}.{:06}", datetime.format("%Y-%m-%dT%H:%M:%S"), micros)
        };
        Timestamp(rendered)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32, nano: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 1)
            .unwrap()
            .and_hms_nano_opt(h, m, s, nano)
            .unwrap()
    }

    #[test]
    fn whole_seconds_have_no_fraction() {
        assert_eq!(Timestamp::from(at(0, 0, 0, 0)).as_str(), "2023-06-01T00:00:00");
    }

    #[test]
    fn fraction_is_six_digits() {
        assert_eq!(
            Timestamp::from(at(12, 30, 45, 1_000)).as_str(),
            "2023-06-01T12:30:45.000001"
        );
        assert_eq!(
            Timestamp::from(at(12, 30, 45, 123_456_789)).as_str(),
            "2023-06-01T12:30:45.123456"
        );
    }

    #[test]
    fn sub_microsecond_remainder_is_dropped() {
        assert_eq!(Timestamp::from(at(23, 59, 59, 999)).as_str(), "2023-06-01T23:59:59");
    }

    #[test]
    fn now_is_iso_formatted() {
        let now = Timestamp::now();
        assert_eq!(now.as_str().as_bytes()[10], b'T');
        assert!(now.as_str().len() == 19 || now.as_str().len() == 26);
    }
}
