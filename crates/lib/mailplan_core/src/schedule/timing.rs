//! Send-time parsing and date/time combination.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::FormError;

/// Parse a `HH:MM` send time: two colon-separated integers, hour `0..=23`,
/// minute `0..=59`.
pub fn parse_send_time(time: &str) -> Result<NaiveTime, FormError> {
    let (hour, minute) = time.split_once(':').ok_or(FormError::InvalidTimeFormat)?;
    let hour: u32 = hour
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidTimeFormat)?;
    let minute: u32 = minute
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidTimeFormat)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(FormError::InvalidTimeFormat)
}

/// Combine a calendar date with a `HH:MM` send time, zeroing seconds.
pub fn combine_date_and_time(date: NaiveDate, time: &str) -> Result<NaiveDateTime, FormError> {
    Ok(date.and_time(parse_send_time(time)?))
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("date")
    }

    #[test]
    fn combines_date_with_hour_and_minute() {
        let combined = combine_date_and_time(march_first(), "09:05").expect("combine");
        assert_eq!(combined.date(), march_first());
        assert_eq!(combined.hour(), 9);
        assert_eq!(combined.minute(), 5);
        assert_eq!(combined.second(), 0);
    }

    #[test]
    fn rejects_hour_out_of_range() {
        assert_eq!(
            combine_date_and_time(march_first(), "25:00"),
            Err(FormError::InvalidTimeFormat)
        );
    }

    #[test]
    fn rejects_minute_out_of_range() {
        assert_eq!(parse_send_time("12:60"), Err(FormError::InvalidTimeFormat));
    }

    #[test]
    fn rejects_non_numeric_and_missing_parts() {
        assert_eq!(parse_send_time("aa:bb"), Err(FormError::InvalidTimeFormat));
        assert_eq!(parse_send_time("9"), Err(FormError::InvalidTimeFormat));
        assert_eq!(parse_send_time(""), Err(FormError::InvalidTimeFormat));
        assert_eq!(
            parse_send_time("09:05:30"),
            Err(FormError::InvalidTimeFormat)
        );
    }

    #[test]
    fn accepts_single_digit_parts() {
        let t = parse_send_time("9:5").expect("parse");
        assert_eq!((t.hour(), t.minute()), (9, 5));
    }
}
