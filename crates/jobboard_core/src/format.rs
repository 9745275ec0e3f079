use chrono::{DateTime, Utc};

use crate::record::{parse_posted_date, Source, UNKNOWN_DATE};

pub const DATE_UNKNOWN_TEXT: &str = "Date unknown";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Human-readable age of a posting relative to `now`.
///
/// Total over any input: unparseable text comes back unchanged.
pub fn relative_time(posted_date: &str, now: DateTime<Utc>) -> String {
    if posted_date == UNKNOWN_DATE {
        return DATE_UNKNOWN_TEXT.to_string();
    }
    let Some(posted) = parse_posted_date(posted_date) else {
        return posted_date.to_string();
    };

    let diff_millis = (now - posted).num_milliseconds().unsigned_abs();
    let days = diff_millis.div_ceil(MILLIS_PER_DAY as u64);

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d if d < 365 => format!("{} months ago", d / 30),
        d => format!("{} years ago", d / 365),
    }
}

/// Icon identifier for a source badge.
pub fn source_icon(source: &Source) -> &'static str {
    match source {
        Source::LinkedIn => "fab fa-linkedin",
        Source::Glassdoor => "fas fa-door-open",
        Source::Indeed => "fas fa-search",
        Source::Other(_) => "fas fa-globe",
    }
}
