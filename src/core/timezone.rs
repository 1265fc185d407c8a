//! Timezone lookup by two-letter country code.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Country codes the lookup understands, with the zone used for each.
const TIMEZONES: &[(&str, Tz)] = &[
    ("CO", chrono_tz::America::Bogota),
    ("MX", chrono_tz::America::Mexico_City),
    ("PE", chrono_tz::America::Lima),
    ("AZ", chrono_tz::America::Sao_Paulo),
    ("BR", chrono_tz::America::Sao_Paulo),
];

/// Resolves a country code (case-insensitive) to its timezone.
#[must_use]
pub fn timezone_for(iso_code: &str) -> Option<Tz> {
    let iso = iso_code.to_uppercase();
    TIMEZONES
        .iter()
        .find(|(code, _)| *code == iso)
        .map(|(_, tz)| *tz)
}

/// Converts `now` to the local time of the country named by `iso_code`.
///
/// # Errors
/// Returns [`Error::NotFound`] for a code outside the table.
pub fn time_in(iso_code: &str, now: DateTime<Utc>) -> Result<DateTime<Tz>> {
    let tz = timezone_for(iso_code).ok_or(Error::NotFound { entity: "Timezone" })?;
    Ok(now.with_timezone(&tz))
}
