use jobboard_core::{
    sort_jobs, update, AppState, Effect, EntryId, FetchOutcome, JobRecord, Msg, SortKey, Source,
    SHOW_LESS_TEXT, SHOW_MORE_TEXT,
};
use pretty_assertions::assert_eq;

fn job(title: &str, company: &str, location: &str, posted_date: &str) -> JobRecord {
    JobRecord {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        posted_date: posted_date.to_string(),
        description: String::new(),
        source: Source::Indeed,
        job_url: format!("https://jobs.example.com/{title}"),
    }
}

fn titles(jobs: &[JobRecord]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

fn loaded_state(jobs: Vec<JobRecord>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::FetchClicked);
    let generation = match effects.as_slice() {
        [Effect::FetchResults { generation, .. }] => *generation,
        other => panic!("unexpected effects {other:?}"),
    };
    update(
        state,
        Msg::ResultsArrived {
            generation,
            outcome: FetchOutcome::Jobs(jobs),
        },
    )
    .0
}

#[test]
fn date_sort_puts_unknown_dates_last() {
    let mut jobs = vec![
        job("unknown-1", "A", "X", "N/A"),
        job("old", "A", "X", "2023-01-01"),
        job("unknown-2", "A", "X", "N/A"),
        job("new", "A", "X", "2024-05-01T10:00:00Z"),
        job("mid", "A", "X", "2023-09-15 08:30:00"),
    ];
    sort_jobs(&mut jobs, SortKey::Date);

    assert_eq!(
        titles(&jobs),
        vec!["new", "mid", "old", "unknown-1", "unknown-2"]
    );
}

#[test]
fn date_sort_keeps_unparseable_text_between_dates_and_unknown() {
    let mut jobs = vec![
        job("na", "A", "X", "N/A"),
        job("text-1", "A", "X", "3 days ago"),
        job("dated", "A", "X", "2024-01-01"),
        job("text-2", "A", "X", "last week"),
    ];
    sort_jobs(&mut jobs, SortKey::Date);

    assert_eq!(titles(&jobs), vec!["dated", "text-1", "text-2", "na"]);
}

#[test]
fn company_sort_is_idempotent_and_puts_lowercase_first_on_ties() {
    let mut jobs = vec![
        job("1", "initech", "X", "N/A"),
        job("2", "Globex", "X", "N/A"),
        job("3", "Acme", "X", "N/A"),
        job("4", "acme", "X", "N/A"),
    ];
    sort_jobs(&mut jobs, SortKey::Company);
    let once = jobs.clone();
    sort_jobs(&mut jobs, SortKey::Company);

    assert_eq!(jobs, once);
    assert_eq!(titles(&jobs), vec!["4", "3", "2", "1"]);
}

#[test]
fn title_and_location_sort_ascending() {
    let mut jobs = vec![
        job("Zoologist", "A", "Boston", "N/A"),
        job("analyst", "A", "Austin", "N/A"),
        job("Engineer", "A", "Chicago", "N/A"),
    ];
    sort_jobs(&mut jobs, SortKey::Title);
    assert_eq!(titles(&jobs), vec!["analyst", "Engineer", "Zoologist"]);

    sort_jobs(&mut jobs, SortKey::Location);
    let locations: Vec<_> = jobs.iter().map(|j| j.location.as_str()).collect();
    assert_eq!(locations, vec!["Austin", "Boston", "Chicago"]);
}

#[test]
fn text_sort_places_accented_names_among_their_base_letters() {
    let mut jobs = vec![
        job("zeta", "Zeta Corp", "Moscow", "N/A"),
        job("edf", "Électricité de France", "Montréal", "N/A"),
        job("acme", "Acme", "Montreal", "N/A"),
        job("skoda", "Škoda", "Mladá Boleslav", "N/A"),
    ];

    sort_jobs(&mut jobs, SortKey::Company);
    assert_eq!(titles(&jobs), vec!["acme", "edf", "skoda", "zeta"]);

    sort_jobs(&mut jobs, SortKey::Location);
    let locations: Vec<_> = jobs.iter().map(|j| j.location.as_str()).collect();
    assert_eq!(
        locations,
        vec!["Mladá Boleslav", "Montreal", "Montréal", "Moscow"]
    );
}

#[test]
fn unknown_sort_key_is_noop() {
    let mut state = loaded_state(vec![
        job("b", "B", "X", "N/A"),
        job("a", "A", "X", "N/A"),
    ]);
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::SortSelected("salary".to_string()));

    assert!(effects.is_empty());
    assert_eq!(next, before);
    assert!(!next.consume_dirty());
}

#[test]
fn sort_message_reorders_and_rerenders() {
    let mut state = loaded_state(vec![
        job("b", "Beta", "X", "N/A"),
        job("a", "Alpha", "X", "N/A"),
    ]);
    assert!(state.consume_dirty());

    let (mut next, _) = update(state, Msg::SortSelected("company".to_string()));

    assert_eq!(titles(next.jobs()), vec!["a", "b"]);
    assert!(next.consume_dirty());
    let companies: Vec<_> = next
        .view()
        .cards
        .iter()
        .map(|c| c.company.clone())
        .collect();
    assert_eq!(companies, vec!["Alpha", "Beta"]);
}

#[test]
fn toggle_flips_only_the_selected_entry() {
    let state = loaded_state(vec![
        job("a", "A", "X", "N/A"),
        job("b", "B", "X", "N/A"),
    ]);
    let jobs_before = state.jobs().to_vec();

    let (state, effects) = update(state, Msg::EntryToggled(EntryId(1)));
    assert!(effects.is_empty());
    assert!(state.is_expanded(EntryId(1)));
    assert!(!state.is_expanded(EntryId(0)));
    assert_eq!(state.jobs(), jobs_before.as_slice());

    let view = state.view();
    assert_eq!(view.cards[0].toggle_label, SHOW_MORE_TEXT);
    assert_eq!(view.cards[1].toggle_label, SHOW_LESS_TEXT);
    assert!(view.cards[1].expanded);

    let (state, _) = update(state, Msg::EntryToggled(EntryId(1)));
    assert!(!state.is_expanded(EntryId(1)));
}

#[test]
fn toggle_out_of_range_is_ignored() {
    let mut state = loaded_state(vec![job("a", "A", "X", "N/A")]);
    assert!(state.consume_dirty());

    let (mut next, _) = update(state, Msg::EntryToggled(EntryId(9)));
    assert!(!next.consume_dirty());
}

#[test]
fn sorting_resets_expanded_flags() {
    let state = loaded_state(vec![
        job("b", "B", "X", "N/A"),
        job("a", "A", "X", "N/A"),
    ]);
    let (state, _) = update(state, Msg::EntryToggled(EntryId(0)));
    assert!(state.is_expanded(EntryId(0)));

    let (state, _) = update(state, Msg::SortSelected("title".to_string()));
    assert!(!state.is_expanded(EntryId(0)));
    assert!(!state.is_expanded(EntryId(1)));
}
