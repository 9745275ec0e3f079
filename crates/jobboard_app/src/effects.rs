use jobboard_core::{
    Effect, FetchOutcome, JobRecord, Msg, SearchCriteria, Source, StartOutcome, UNKNOWN_DATE,
};
use jobboard_engine::{EngineEvent, EngineHandle, FetchReply, JobPayload, StartRequest};
use jobboard_logging::{board_info, board_warn};

/// What an engine completion means for the UI thread.
#[derive(Debug)]
pub(crate) enum Completion {
    Msg(Msg),
    /// Informational text that does not touch controller state.
    Notice(String),
}

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSearch { criteria } => {
                    board_info!(
                        "StartSearch query={:?} results_wanted={}",
                        criteria.query,
                        criteria.results_wanted
                    );
                    self.engine.start_search(map_criteria(criteria));
                }
                Effect::FetchResults { generation, query } => {
                    board_info!("FetchResults generation={} query={:?}", generation, query);
                    self.engine.fetch_results(generation, query);
                }
            }
        }
    }

    pub(crate) fn check_health(&self) {
        self.engine.check_health();
    }

    pub(crate) fn poll(&self) -> Option<Completion> {
        self.engine.try_recv().map(map_event)
    }

    #[cfg(test)]
    pub(crate) fn wait(&self, timeout: std::time::Duration) -> Option<Completion> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_criteria(criteria: SearchCriteria) -> StartRequest {
    StartRequest {
        query: criteria.query,
        exclude_keywords: criteria.exclude_keywords,
        exclude_titles: criteria.exclude_titles,
        results_wanted: criteria.results_wanted,
    }
}

fn map_event(event: EngineEvent) -> Completion {
    match event {
        EngineEvent::SearchStarted { result } => Completion::Msg(Msg::SearchStarted(match result {
            Ok(reply) => StartOutcome::Accepted {
                message: reply.message,
            },
            Err(err) => StartOutcome::Failed {
                reason: err.to_string(),
            },
        })),
        EngineEvent::ResultsFetched { generation, result } => {
            let outcome = match result {
                Ok(FetchReply::Jobs(jobs)) => {
                    FetchOutcome::Jobs(jobs.into_iter().map(map_job).collect())
                }
                Ok(FetchReply::Message(message)) => FetchOutcome::Message(message),
                Err(err) => FetchOutcome::Failed {
                    reason: err.to_string(),
                },
            };
            Completion::Msg(Msg::ResultsArrived {
                generation,
                outcome,
            })
        }
        EngineEvent::HealthChecked { result } => match result {
            Ok(reply) => Completion::Notice(format!("Service: {}", reply.message)),
            Err(err) => {
                board_warn!("Health check failed: {}", err);
                Completion::Notice(format!("Service unreachable: {}", err.kind))
            }
        },
    }
}

fn map_job(job: JobPayload) -> JobRecord {
    JobRecord {
        title: job.title,
        company: job.company,
        location: job.location,
        posted_date: job
            .posted_date
            .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        description: job.description,
        source: Source::from_label(&job.source),
        job_url: job.job_url,
    }
}
