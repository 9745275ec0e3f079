use jobboard_logging::{board_debug, board_warn};

use crate::sort::SortKey;
use crate::{AppState, Effect, FetchOutcome, Generation, Msg, StartOutcome, StatusLine, StatusStyle};

pub const SEARCH_PENDING_TEXT: &str = "Searching for jobs, please wait...";
pub const SEARCH_FAILED_TEXT: &str = "An error occurred, please try again later.";
pub const FETCH_FAILED_TEXT: &str = "An error occurred while fetching data.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged { field, text } => {
            state.set_input(field, text);
            Vec::new()
        }
        Msg::StartSearchClicked => {
            let criteria = state.inputs().criteria();
            state.set_status(StatusLine::new(SEARCH_PENDING_TEXT, StatusStyle::Plain));
            vec![Effect::StartSearch { criteria }]
        }
        Msg::SearchStarted(outcome) => {
            let status = match outcome {
                StartOutcome::Accepted { message } => {
                    StatusLine::new(message, StatusStyle::Success)
                }
                StartOutcome::Failed { reason } => {
                    board_warn!("Start search failed: {}", reason);
                    StatusLine::new(SEARCH_FAILED_TEXT, StatusStyle::Error)
                }
            };
            state.set_status(status);
            Vec::new()
        }
        Msg::FetchClicked => {
            let query = state.inputs().query.clone();
            let generation = state.begin_fetch();
            vec![Effect::FetchResults { generation, query }]
        }
        Msg::ResultsArrived {
            generation,
            outcome,
        } => {
            apply_fetch(&mut state, generation, outcome);
            Vec::new()
        }
        Msg::SortSelected(raw) => {
            match SortKey::parse(&raw) {
                Some(key) => state.sort_jobs(key),
                None => board_debug!("Ignoring unknown sort key {:?}", raw),
            }
            Vec::new()
        }
        Msg::EntryToggled(entry) => {
            state.toggle(entry);
            Vec::new()
        }
    };

    (state, effects)
}

fn apply_fetch(state: &mut AppState, generation: Generation, outcome: FetchOutcome) {
    if !state.is_current(generation) {
        board_debug!(
            "Dropping stale fetch generation {} (latest {})",
            generation,
            state.latest_generation()
        );
        return;
    }

    // Cleared first so no later step can leave the indicator on.
    state.finish_loading();

    match outcome {
        FetchOutcome::Jobs(jobs) => {
            state.replace_jobs(jobs);
            state.set_status(StatusLine::default());
        }
        FetchOutcome::Message(message) => {
            state.set_status(StatusLine::new(message, StatusStyle::Plain));
        }
        FetchOutcome::Failed { reason } => {
            board_warn!("Fetch generation {} failed: {}", generation, reason);
            state.set_status(StatusLine::new(FETCH_FAILED_TEXT, StatusStyle::Error));
        }
    }
}
