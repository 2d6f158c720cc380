use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::config::DisplayZone;

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%d/%m/%Y";

fn format_in(ts: DateTime<Utc>, zone: DisplayZone, fmt: &str) -> String {
    match zone {
        DisplayZone::Local => ts.with_timezone(&Local).format(fmt).to_string(),
        DisplayZone::Named(tz) => ts.with_timezone(&tz).format(fmt).to_string(),
    }
}

/// en-GB wall-clock time (`HH:MM:SS`), or `-` when absent.
pub fn format_time_in(ts: Option<DateTime<Utc>>, zone: DisplayZone) -> String {
    ts.map(|ts| format_in(ts, zone, TIME_FORMAT))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_date_in(ts: DateTime<Utc>, zone: DisplayZone) -> String {
    format_in(ts, zone, DATE_FORMAT)
}

/// Calendar date of a timestamp in UTC, used by the history range filter.
pub fn utc_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Value for an `<input type="date">`: the `YYYY-MM-DD` prefix of a stored date.
pub fn date_input_value(raw: &str) -> String {
    raw.split('T').next().unwrap_or_default().to_string()
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn nine_am() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn formats_time_in_en_gb_style() {
        let utc = DisplayZone::Named(chrono_tz::UTC);
        assert_eq!(format_time_in(Some(nine_am()), utc), "09:00:00");
        assert_eq!(format_date_in(nine_am(), utc), "01/01/2024");
    }

    #[test]
    fn missing_timestamp_renders_dash() {
        assert_eq!(format_time_in(None, DisplayZone::Local), "-");
    }

    #[test]
    fn named_zone_shifts_wall_clock() {
        let jakarta = DisplayZone::Named(chrono_tz::Asia::Jakarta);
        assert_eq!(format_time_in(Some(nine_am()), jakarta), "16:00:00");
    }

    #[test]
    fn date_input_value_strips_time_part() {
        assert_eq!(date_input_value("2023-04-01T00:00:00.000Z"), "2023-04-01");
        assert_eq!(date_input_value("2023-04-01"), "2023-04-01");
        assert_eq!(date_input_value(""), "");
    }

    #[test]
    fn parse_date_input_rejects_garbage() {
        assert_eq!(
            parse_date_input("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("29/02/2024"), None);
    }
}
