// Date utility functions
// Conversions between stored UTC instants and the local strings shown in the UI

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Minute-precision format used by datetime cell inputs.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const INPUT_FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const DATE_LABEL_FORMAT: &str = "%-m/%-d/%Y";
const EXPORT_STAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Render an instant as a cell input value (`YYYY-MM-DDTHH:MM`) in `tz`.
pub fn format_input<Tz: TimeZone>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format(INPUT_FORMAT).to_string()
}

/// Parse a cell input value interpreted as wall-clock time in `tz`.
///
/// Seconds are accepted but optional. Ambiguous local times resolve to the
/// earlier instant; non-existent ones (DST gaps) are rejected.
pub fn parse_input<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let text = text.trim();
    let naive = NaiveDateTime::parse_from_str(text, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, INPUT_FORMAT_WITH_SECONDS))
        .ok()?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Full date and time, e.g. `3/1/2025, 9:05:00 AM`.
pub fn format_display<Tz: TimeZone>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// Date only, e.g. `3/1/2025`.
pub fn format_date_label<Tz: TimeZone>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format(DATE_LABEL_FORMAT).to_string()
}

/// UTC timestamp safe for file names: `YYYY-MM-DDTHH-MM-SS`.
pub fn file_stamp(value: DateTime<Utc>) -> String {
    value.format(EXPORT_STAMP_FORMAT).to_string()
}
