//! Japan Standard Time helpers
//!
//! Timestamps are stored in UTC. Operators think in JST calendar days, so
//! date filters and export filenames are computed against a fixed +09:00
//! offset (Japan has no daylight saving time).

use crate::utils::error::{CatalogError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// The JST offset
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current wall clock time in JST
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

/// UTC bounds `[start, end)` of a JST calendar day given as `YYYY-MM-DD`
pub fn jst_day_bounds(date: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| CatalogError::validation(format!("Invalid date (expected YYYY-MM-DD): {}", date)))?;

    let start = day
        .and_time(NaiveTime::MIN)
        .and_local_timezone(jst())
        .single()
        .ok_or_else(|| CatalogError::validation(format!("Invalid date: {}", date)))?
        .with_timezone(&Utc);

    Ok((start, start + chrono::Duration::days(1)))
}

/// Spreadsheet export filename for the given instant
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!(
        "products_export_{}.xlsx",
        at.with_timezone(&jst()).format("%Y-%m-%dT%H-%M-%S")
    )
}
