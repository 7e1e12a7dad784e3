//! Posting schedule: three slots on the next three days in a target timezone.

use chrono::{DateTime, Days, Duration, LocalResult, NaiveDate, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Posting hour for day +1, +2 and +3 respectively.
pub const SLOT_HOURS: [u32; 3] = [10, 13, 19];

/// Resolve an IANA timezone name, silently falling back to UTC.
pub fn resolve_timezone(name: &str) -> Tz {
    name.trim().parse::<Tz>().unwrap_or_else(|_| {
        debug!(timezone = name, "unknown timezone, using UTC");
        Tz::UTC
    })
}

/// Schedule three posts starting tomorrow, relative to the current time.
pub fn schedule(timezone: &str) -> Vec<String> {
    let tz = resolve_timezone(timezone);
    schedule_at(tz, Utc::now().with_timezone(&tz))
}

/// Schedule three posts relative to `now`, formatted as RFC 3339 with offset.
pub fn schedule_at(tz: Tz, now: DateTime<Tz>) -> Vec<String> {
    let today = now.date_naive();

    SLOT_HOURS
        .iter()
        .zip(1u64..)
        .filter_map(|(&hour, offset)| {
            let day = today.checked_add_days(Days::new(offset))?;
            slot(tz, day, hour)
        })
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, false))
        .collect()
}

/// Local `hour:00:00` on `day`. Times skipped by a DST jump move forward to the
/// next hour that exists; repeated times take the earlier instant.
fn slot(tz: Tz, day: NaiveDate, hour: u32) -> Option<DateTime<Tz>> {
    let mut local = day.and_hms_opt(hour, 0, 0)?;
    for _ in 0..3 {
        match tz.from_local_datetime(&local) {
            LocalResult::Single(at) => return Some(at),
            LocalResult::Ambiguous(earliest, _) => return Some(earliest),
            LocalResult::None => local = local.checked_add_signed(Duration::hours(1))?,
        }
    }
    None
}
