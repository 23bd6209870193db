//! Wall-clock helpers for record identifiers and registration dates.
//!
//! The browser build reads `Date.now()`; native builds (SSR and tests) read
//! the system clock. Formatting goes through `time` so both agree.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let ms = js_sys::Date::now() as i64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Format an epoch-millisecond timestamp as an ISO calendar date (`YYYY-MM-DD`, UTC).
///
/// Out-of-range timestamps clamp to the Unix epoch.
pub fn iso_date(millis: i64) -> String {
    let nanos = i128::from(millis) * 1_000_000;
    let date = time::OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .unwrap_or(time::OffsetDateTime::UNIX_EPOCH)
        .date();
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Today's date as `YYYY-MM-DD`.
pub fn today() -> String {
    iso_date(now_millis())
}
