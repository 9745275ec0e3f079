use crate::{EntryId, Generation, InputField, JobRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited one of the search inputs.
    InputChanged { field: InputField, text: String },
    /// User asked the service to start a scrape with the current inputs.
    StartSearchClicked,
    /// Service answered (or failed to answer) the start request.
    SearchStarted(StartOutcome),
    /// User asked to fetch and display results for the current query.
    FetchClicked,
    /// Fetch completion for a given request generation.
    ResultsArrived {
        generation: Generation,
        outcome: FetchOutcome,
    },
    /// User picked a value in the sort selector.
    SortSelected(String),
    /// User clicked a card's expand/collapse control.
    EntryToggled(EntryId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Accepted { message: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Jobs(Vec<JobRecord>),
    /// Service reported "no data yet" or an error condition.
    Message(String),
    Failed { reason: String },
}
