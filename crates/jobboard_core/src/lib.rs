//! Job board core: pure state machine, record enrichment and page rendering.
mod analytics;
mod criteria;
mod effect;
mod format;
mod msg;
mod record;
mod render;
mod skills;
mod sort;
mod state;
mod update;
mod view_model;

pub use analytics::{compute_stats, stats_line, JobStats};
pub use criteria::{
    InputField, SearchCriteria, SearchInputs, DEFAULT_QUERY, DEFAULT_RESULTS_WANTED,
};
pub use effect::Effect;
pub use format::{relative_time, source_icon, DATE_UNKNOWN_TEXT};
pub use msg::{FetchOutcome, Msg, StartOutcome};
pub use record::{parse_posted_date, JobRecord, Source, UNKNOWN_DATE};
pub use render::{render_cards, render_page, RenderError, LOADING_TEXT, VIEW_POSTING_TEXT};
pub use skills::{extract_skills, MAX_SKILL_TAGS};
pub use sort::{sort_jobs, SortKey};
pub use state::{AppState, EntryId, Generation, StatusLine, StatusStyle};
pub use update::{update, FETCH_FAILED_TEXT, SEARCH_FAILED_TEXT, SEARCH_PENDING_TEXT};
pub use view_model::{AppViewModel, JobCardView, SHOW_LESS_TEXT, SHOW_MORE_TEXT};
