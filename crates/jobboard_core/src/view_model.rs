use chrono::{DateTime, Utc};

use crate::format::{relative_time, source_icon};
use crate::skills::extract_skills;
use crate::{EntryId, JobRecord, SearchInputs, StatusLine};

pub const SHOW_MORE_TEXT: &str = "Show more";
pub const SHOW_LESS_TEXT: &str = "Show less";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub inputs: SearchInputs,
    pub status: StatusLine,
    pub loading: bool,
    /// Present only after a successful fetch.
    pub stats_text: Option<String>,
    pub job_count: usize,
    pub cards: Vec<JobCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub entry: EntryId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_label: String,
    pub source_label: String,
    pub source_icon: &'static str,
    pub source_class: String,
    pub skills: Vec<String>,
    pub description: String,
    pub expanded: bool,
    pub toggle_label: &'static str,
    pub job_url: String,
}

pub(crate) fn build_card(
    entry: EntryId,
    job: &JobRecord,
    expanded: bool,
    now: DateTime<Utc>,
) -> JobCardView {
    JobCardView {
        entry,
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        posted_label: relative_time(&job.posted_date, now),
        source_label: job.source.label().to_string(),
        source_icon: source_icon(&job.source),
        source_class: job.source.style_class(),
        skills: extract_skills(&job.description),
        description: job.description.clone(),
        expanded,
        toggle_label: if expanded {
            SHOW_LESS_TEXT
        } else {
            SHOW_MORE_TEXT
        },
        job_url: job.job_url.clone(),
    }
}
