use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an ISO `YYYY-MM-DD` date key
pub fn parse_date(value: &str) -> crate::Result<Date> {
    match Date::parse(value.trim(), ISO_DATE) {
        Ok(date) => Ok(date),
        Err(_) => crate::user!("invalid date '{}', expected YYYY-MM-DD", value),
    }
}

/// Format a date as its ISO `YYYY-MM-DD` key
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// `date` moved by `days`, saturating at the representable range
pub fn add_days(date: Date, days: i64) -> Date {
    let span = (Date::MAX - Date::MIN).whole_days();

    date.saturating_add(Duration::days(days.clamp(-span, span)))
}

/// `date` moved by whole weeks; overflowing offsets are a user error
pub fn add_weeks(date: Date, weeks: i64) -> crate::Result<Date> {
    match weeks.checked_mul(7) {
        Some(days) => Ok(add_days(date, days)),
        None => crate::user!("week offset {} is out of range", weeks),
    }
}

/// Whole days from `from` to `to`, negative when `to` is earlier
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// Short weekday label, e.g. `Mon`
pub fn day_name(date: Date) -> String {
    date.weekday().to_string().chars().take(3).collect()
}

/// Short month and day label, e.g. `Oct 16`
pub fn month_day(date: Date) -> String {
    let month: String = date.month().to_string().chars().take(3).collect();

    format!("{month} {}", date.day())
}

/// Monday of the week containing `date`
pub fn monday_of(date: Date) -> Date {
    let offset = date.weekday().number_days_from_monday();

    add_days(date, -i64::from(offset))
}

pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|err| {
            tracing::debug!(error = %err, "local offset unavailable, using UTC");
            OffsetDateTime::now_utc()
        })
        .date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_and_format_round_trip() {
        let parsed = parse_date("2025-01-06").unwrap();
        assert_eq!(parsed, date!(2025 - 01 - 06));
        assert_eq!(format_date(parsed), "2025-01-06");
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for value in ["", "2025-1-6", "06/01/2025", "2025-02-30", "yesterday"] {
            let err = parse_date(value).unwrap_err();
            assert!(err.is_user_facing(), "{value} should be a user error");
        }
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(add_days(date!(2024 - 12 - 30), 3), date!(2025 - 01 - 02));
        assert_eq!(add_days(date!(2025 - 03 - 01), -1), date!(2025 - 02 - 28));
    }

    #[test]
    fn test_add_days_saturates_on_huge_offsets() {
        let day = date!(2025 - 01 - 06);
        assert_eq!(add_days(day, i64::MAX), Date::MAX);
        assert_eq!(add_days(day, i64::MIN), Date::MIN);
        assert_eq!(add_days(day, (2_000_000_000_000_000 / 7) * 7), Date::MAX);
    }

    #[test]
    fn test_add_weeks() {
        let day = date!(2025 - 01 - 06);
        assert_eq!(add_weeks(day, -1).unwrap(), date!(2024 - 12 - 30));
        assert_eq!(add_weeks(day, 2_000_000_000_000_000).unwrap(), Date::MAX);
        assert!(add_weeks(day, i64::MAX).unwrap_err().is_user_facing());
        assert!(add_weeks(day, i64::MIN).unwrap_err().is_user_facing());
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date!(2025 - 01 - 06), date!(2025 - 01 - 20)), 14);
        assert_eq!(days_between(date!(2025 - 01 - 06), date!(2024 - 12 - 30)), -7);
    }

    #[test]
    fn test_labels() {
        assert_eq!(day_name(date!(2025 - 01 - 06)), "Mon");
        assert_eq!(day_name(date!(2025 - 01 - 12)), "Sun");
        assert_eq!(month_day(date!(2025 - 10 - 16)), "Oct 16");
    }

    #[test]
    fn test_monday_of() {
        assert_eq!(monday_of(date!(2025 - 01 - 06)), date!(2025 - 01 - 06));
        assert_eq!(monday_of(date!(2025 - 01 - 08)), date!(2025 - 01 - 06));
        assert_eq!(monday_of(date!(2025 - 01 - 12)), date!(2025 - 01 - 06));
    }
}
