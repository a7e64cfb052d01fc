use chrono::{DateTime, Utc};

/// Formats an instant as `DD-MM-YYYY h:mma`, e.g. `09-03-2024 2:05pm`.
///
/// This is the cell format the spreadsheet consumer expects, bit for bit: day,
/// month and minute are zero padded, the 12-hour field is not, and midnight and
/// noon both render as `12`.
pub fn sheet_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%d-%m-%Y %-I:%M%P").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_afternoon() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(sheet_timestamp(instant), "09-03-2024 2:05pm");
    }

    #[test]
    fn midnight_renders_as_twelve_am() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();
        assert_eq!(sheet_timestamp(instant), "09-03-2024 12:30am");
    }

    #[test]
    fn noon_renders_as_twelve_pm() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(sheet_timestamp(instant), "09-03-2024 12:00pm");
    }

    #[test]
    fn day_month_and_minute_are_zero_padded() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 3, 13, 5, 59).unwrap();
        assert_eq!(sheet_timestamp(instant), "03-01-2025 1:05pm");
    }

    #[test]
    fn morning_hour_is_not_padded() {
        let instant = Utc.with_ymd_and_hms(2024, 11, 20, 9, 59, 0).unwrap();
        assert_eq!(sheet_timestamp(instant), "20-11-2024 9:59am");
    }
}
