use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Marker the service uses when a listing carries no posting date.
pub const UNKNOWN_DATE: &str = "N/A";

/// Board a listing was scraped from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    LinkedIn,
    Glassdoor,
    Indeed,
    Other(String),
}

impl Source {
    /// Case-insensitive mapping from the service's source label.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("linkedin") {
            Source::LinkedIn
        } else if trimmed.eq_ignore_ascii_case("glassdoor") {
            Source::Glassdoor
        } else if trimmed.eq_ignore_ascii_case("indeed") {
            Source::Indeed
        } else {
            Source::Other(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Source::LinkedIn => "LinkedIn",
            Source::Glassdoor => "Glassdoor",
            Source::Indeed => "Indeed",
            Source::Other(label) => label,
        }
    }

    /// CSS class of the source badge, e.g. `source-linkedin`.
    pub fn style_class(&self) -> String {
        match self {
            Source::LinkedIn => "source-linkedin".to_string(),
            Source::Glassdoor => "source-glassdoor".to_string(),
            Source::Indeed => "source-indeed".to_string(),
            Source::Other(label) if label.is_empty() => "source-other".to_string(),
            Source::Other(label) => {
                let slug: String = label
                    .to_lowercase()
                    .chars()
                    .map(|c| if c.is_alphanumeric() { c } else { '-' })
                    .collect();
                format!("source-{slug}")
            }
        }
    }
}

/// One listing returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    /// ISO-like date, [`UNKNOWN_DATE`], or free text such as "3 days ago".
    pub posted_date: String,
    pub description: String,
    pub source: Source,
    pub job_url: String,
}

impl JobRecord {
    pub fn has_unknown_date(&self) -> bool {
        self.posted_date == UNKNOWN_DATE
    }

    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        parse_posted_date(&self.posted_date)
    }
}

/// Parses the date forms the service is known to emit. Naive values are read as UTC.
pub fn parse_posted_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == UNKNOWN_DATE {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
