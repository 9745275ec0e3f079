use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobboard_logging::board_info;

use crate::service::{ReqwestSearchService, SearchService, ServiceSettings};
use crate::{EngineEvent, Generation, ServiceError, StartRequest};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build service client: {0}")]
    Client(#[from] ServiceError),
}

enum EngineCommand {
    StartSearch(StartRequest),
    FetchResults { generation: Generation, query: String },
    CheckHealth,
}

/// Runs service calls on a background runtime; completions come back as [`EngineEvent`]s.
///
/// Requests are never cancelled: overlapping fetches all complete and report
/// their own generation.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings) -> Result<Self, EngineError> {
        board_info!("Search service at {}", settings.base_url);
        let service = ReqwestSearchService::new(settings)?;
        Self::with_service(Arc::new(service))
    }

    pub fn with_service(service: Arc<dyn SearchService>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(service.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn start_search(&self, request: StartRequest) {
        let _ = self.cmd_tx.send(EngineCommand::StartSearch(request));
    }

    pub fn fetch_results(&self, generation: Generation, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchResults {
            generation,
            query: query.into(),
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    service: &dyn SearchService,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::StartSearch(request) => EngineEvent::SearchStarted {
            result: service.start_search(&request).await,
        },
        EngineCommand::FetchResults { generation, query } => EngineEvent::ResultsFetched {
            generation,
            result: service.fetch_results(&query).await,
        },
        EngineCommand::CheckHealth => EngineEvent::HealthChecked {
            result: service.health().await,
        },
    };
    let _ = event_tx.send(event);
}
