//! Timestamp display.
//!
//! The service sends RFC 3339 strings. They are shifted into the viewer's
//! offset and printed day-first (`dd/mm/yyyy`, 24-hour) in every locale.
//! Anything that does not parse is shown verbatim.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// How much of the time of day to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    /// List rows.
    Minutes,
    /// Message bubbles.
    Seconds,
}

const MINUTES: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year] [hour]:[minute]");
const SECONDS: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

/// Format `raw` for display in `offset`.
#[must_use]
pub fn format_timestamp(raw: &str, precision: Precision, offset: UtcOffset) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw.trim(), &Rfc3339) else {
        return raw.to_owned();
    };
    let description = match precision {
        Precision::Minutes => MINUTES,
        Precision::Seconds => SECONDS,
    };
    parsed.to_offset(offset).format(description).unwrap_or_else(|_| raw.to_owned())
}

/// The browser's current UTC offset; UTC when rendering on the server.
#[must_use]
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        // getTimezoneOffset is minutes *behind* UTC.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = -(js_sys::Date::new_0().get_timezone_offset() as i32);
        UtcOffset::from_whole_seconds(minutes * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}
