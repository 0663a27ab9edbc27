use chrono::{Days, Duration, NaiveDate, Utc};

/// Challenge number for `date`, counting `start` as challenge 1.
pub fn challenge_number_for(date: NaiveDate, start: NaiveDate) -> Option<u64> {
    let days = date.signed_duration_since(start).num_days();
    u64::try_from(days).ok().map(|d| d + 1)
}

pub fn date_for_challenge(number: u64, start: NaiveDate) -> Option<NaiveDate> {
    let offset = number.checked_sub(1)?;
    start.checked_add_days(Days::new(offset))
}

/// Number and record date for a challenge played on `today`.
///
/// Without an explicit number this is `today`'s scheduled challenge. The
/// record is always stamped with `today`, so number and date come from the
/// same calendar day.
pub fn challenge_for_day(
    number: Option<u64>,
    today: NaiveDate,
    start: NaiveDate,
) -> Option<(u64, NaiveDate)> {
    let number = match number {
        Some(number) => number,
        None => challenge_number_for(today, start)?,
    };
    Some((number, today))
}

/// Today's date at a fixed offset from UTC.
pub fn today_in_offset(offset_hours: i32) -> NaiveDate {
    (Utc::now() + Duration::hours(i64::from(offset_hours))).date_naive()
}

/// Number for an unscheduled challenge, taken from the clock.
pub fn random_challenge_number() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}
