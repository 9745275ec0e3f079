use chrono::{DateTime, Utc};
use jobboard_logging::{board_debug, board_info};

use crate::analytics::{compute_stats, stats_line};
use crate::criteria::{InputField, SearchInputs};
use crate::record::JobRecord;
use crate::sort::{sort_jobs, SortKey};
use crate::view_model::{build_card, AppViewModel};

/// Sequence number of a fetch request. Only the latest issued one is applied.
pub type Generation = u64;

/// Position of a card in the currently displayed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusStyle {
    #[default]
    Plain,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub text: String,
    pub style: StatusStyle,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, style: StatusStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Presentation controller state: the only owner of the job collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    inputs: SearchInputs,
    jobs: Vec<JobRecord>,
    /// Parallel to `jobs`; reset whenever the collection is re-rendered.
    expanded: Vec<bool>,
    list_visible: bool,
    stats_visible: bool,
    status: StatusLine,
    loading: bool,
    latest_generation: Generation,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        self.view_at(Utc::now())
    }

    /// View model with relative times computed against `now`.
    pub fn view_at(&self, now: DateTime<Utc>) -> AppViewModel {
        let cards = if self.list_visible {
            self.jobs
                .iter()
                .zip(&self.expanded)
                .enumerate()
                .map(|(idx, (job, expanded))| build_card(EntryId(idx), job, *expanded, now))
                .collect()
        } else {
            Vec::new()
        };
        let stats_text = self
            .stats_visible
            .then(|| stats_line(self.jobs.len(), compute_stats(&self.jobs)));

        AppViewModel {
            inputs: self.inputs.clone(),
            status: self.status.clone(),
            loading: self.loading,
            stats_text,
            job_count: self.jobs.len(),
            cards,
        }
    }

    pub fn inputs(&self) -> &SearchInputs {
        &self.inputs
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest_generation
    }

    pub fn is_expanded(&self, entry: EntryId) -> bool {
        self.expanded.get(entry.0).copied().unwrap_or(false)
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, field: InputField, text: String) {
        self.inputs.set(field, text);
        self.mark_dirty();
    }

    pub(crate) fn set_status(&mut self, status: StatusLine) {
        self.status = status;
        self.mark_dirty();
    }

    /// Starts a new fetch: shows the loading indicator, hides list and stats.
    pub(crate) fn begin_fetch(&mut self) -> Generation {
        self.latest_generation += 1;
        self.loading = true;
        self.list_visible = false;
        self.stats_visible = false;
        self.mark_dirty();
        self.latest_generation
    }

    pub(crate) fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest_generation
    }

    pub(crate) fn finish_loading(&mut self) {
        self.loading = false;
        self.mark_dirty();
    }

    pub(crate) fn replace_jobs(&mut self, jobs: Vec<JobRecord>) {
        board_info!("Replacing collection with {} jobs", jobs.len());
        self.jobs = jobs;
        self.reset_display_state();
        self.stats_visible = true;
        self.mark_dirty();
    }

    pub(crate) fn sort_jobs(&mut self, key: SortKey) {
        sort_jobs(&mut self.jobs, key);
        self.reset_display_state();
        self.mark_dirty();
    }

    pub(crate) fn toggle(&mut self, entry: EntryId) {
        match self.expanded.get_mut(entry.0) {
            Some(flag) => {
                *flag = !*flag;
                self.mark_dirty();
            }
            None => board_debug!("Ignoring toggle for unknown entry {}", entry.0),
        }
    }

    fn reset_display_state(&mut self) {
        self.expanded = vec![false; self.jobs.len()];
        self.list_visible = true;
    }
}
