use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorOptions, Strength};
use jobboard_logging::board_warn;

use crate::record::JobRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Company,
    Title,
    Location,
}

impl SortKey {
    /// Maps a sort selector value; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "date" => Some(SortKey::Date),
            "company" => Some(SortKey::Company),
            "title" => Some(SortKey::Title),
            "location" => Some(SortKey::Location),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Company => "company",
            SortKey::Title => "title",
            SortKey::Location => "location",
        }
    }
}

/// Stable in-place sort of the collection.
pub fn sort_jobs(jobs: &mut [JobRecord], key: SortKey) {
    let field: fn(&JobRecord) -> &str = match key {
        SortKey::Date => {
            jobs.sort_by(compare_posted);
            return;
        }
        SortKey::Company => company,
        SortKey::Title => title,
        SortKey::Location => location,
    };
    let collator = text_collator();
    jobs.sort_by(|a, b| compare_text(collator.as_ref(), field(a), field(b)));
}

fn company(job: &JobRecord) -> &str {
    &job.company
}

fn title(job: &JobRecord) -> &str {
    &job.title
}

fn location(job: &JobRecord) -> &str {
    &job.location
}

/// Newest first, then unparseable text, then the unknown marker.
fn compare_posted(a: &JobRecord, b: &JobRecord) -> Ordering {
    let (a_rank, a_date) = date_rank(a);
    let (b_rank, b_date) = date_rank(b);
    a_rank.cmp(&b_rank).then_with(|| b_date.cmp(&a_date))
}

fn date_rank(job: &JobRecord) -> (u8, Option<DateTime<Utc>>) {
    if job.has_unknown_date() {
        return (2, None);
    }
    match job.posted_at() {
        Some(date) => (0, Some(date)),
        None => (1, None),
    }
}

/// Root-locale collator: accents and case only break ties, lowercase first.
fn text_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            board_warn!("Collator unavailable, sorting by lowercase text: {}", err);
            None
        }
    }
}

fn compare_text(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a)),
    }
}
