//! Job board engine: remote search service client and effect execution.
mod engine;
mod persist;
mod service;
mod types;
mod wire;

pub use engine::{EngineError, EngineHandle};
pub use persist::{ensure_output_dir, PageWriter, PersistError};
pub use service::{ReqwestSearchService, SearchService, ServiceSettings};
pub use types::{
    EngineEvent, FailureKind, FetchReply, Generation, ServiceError, StartRequest, StatusReply,
};
pub use wire::JobPayload;
