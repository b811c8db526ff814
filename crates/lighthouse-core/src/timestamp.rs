use time::macros::format_description;
use time::OffsetDateTime;

/// Returned if the clock reading cannot be formatted.
const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00";

/// Current local wall-clock time as `YYYY-MM-DDTHH:MM:SS`.
///
/// Second precision and no UTC offset, which is what the events warehouse
/// expects in `occured_at`. Falls back to UTC when the local offset cannot be
/// determined (e.g. in a multi-threaded process on some Unix platforms).
#[must_use]
pub fn current_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

pub(crate) fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_string())
}
