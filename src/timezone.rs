use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// The current UTC offset of the canonical timezone, e.g. "Asia/Kolkata".
///
/// Returns `None` if the timezone name is not known.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Midnight at the start of `date` in the canonical timezone.
///
/// Returns `None` if the timezone name is not known.
pub fn local_midnight(date: Date, canonical_timezone: &str) -> Option<OffsetDateTime> {
    let timezone = time_tz::timezones::get_by_name(canonical_timezone)?;
    let offset = timezone
        .get_offset_utc(&date.midnight().assume_utc())
        .to_utc();

    Some(date.midnight().assume_offset(offset))
}

/// Today's date in the timezone given by `local_offset`.
pub fn local_today(local_offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(local_offset).date()
}
