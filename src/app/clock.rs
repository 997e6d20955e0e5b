//! Daily countdown

use chrono::{DateTime, NaiveTime, TimeZone};

/// Time left until the end of `now`'s local day, as `"{h}h {m}m"`
pub fn time_remaining<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let local = now.naive_local();
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
        .map(|t| local.date().and_time(t))
        .unwrap_or(local);

    let diff = end_of_day - local;
    let hours = diff.num_hours();
    let minutes = diff.num_minutes() % 60;

    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_morning() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap();
        assert_eq!(time_remaining(&now), "13h 59m");
    }

    #[test]
    fn test_last_minute() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 23, 59, 30).unwrap();
        assert_eq!(time_remaining(&now), "0h 0m");
    }

    #[test]
    fn test_uses_local_day() {
        // 22:30 UTC is 00:30 the next day at UTC+2
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2026, 3, 14, 22, 30, 0)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(time_remaining(&now), "23h 29m");
    }
}
