use time::{Date, Duration, Month, OffsetDateTime};

/// The same wall-clock instant `months` calendar months earlier.
///
/// Days past the end of a shorter target month roll forward into the next
/// month (Aug 31 minus 6 months is Feb 31, i.e. Mar 3, or Mar 2 in leap years).
/// Results below the supported date range saturate to `Date::MIN`.
pub fn months_before(ts: OffsetDateTime, months: u32) -> OffsetDateTime {
    let zero_based = i64::from(u8::from(ts.month())) - 1 - i64::from(months);
    let year = i64::from(ts.year()) + zero_based.div_euclid(12);
    let month = Month::January.nth_next(zero_based.rem_euclid(12) as u8);

    let date = i32::try_from(year)
        .ok()
        .and_then(|year| Date::from_calendar_date(year, month, 1).ok())
        .and_then(|first| first.checked_add(Duration::days(i64::from(ts.day()) - 1)));

    ts.replace_date(date.unwrap_or(Date::MIN))
}
