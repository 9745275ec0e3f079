use std::time::Duration;

use futures_util::StreamExt;
use jobboard_logging::{board_debug, board_trace};
use url::Url;

use crate::wire::{decode_fetch, decode_status};
use crate::{FailureKind, FetchReply, ServiceError, StartRequest, StatusReply};

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Scheme, host and optional path prefix of the search service.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub start_path: String,
    pub fetch_path: String,
    pub health_path: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            start_path: "/start_scrape".to_string(),
            fetch_path: "/get_jobs".to_string(),
            health_path: "/".to_string(),
        }
    }
}

/// The two operations of the remote search service, plus its health probe.
#[async_trait::async_trait]
pub trait SearchService: Send + Sync {
    async fn start_search(&self, request: &StartRequest) -> Result<StatusReply, ServiceError>;

    async fn fetch_results(&self, query: &str) -> Result<FetchReply, ServiceError>;

    async fn health(&self) -> Result<StatusReply, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchService {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl ReqwestSearchService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ServiceError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))
            .map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, ServiceError> {
        board_debug!("GET {}", url);
        let endpoint = url.path().to_string();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        board_trace!("Received {} bytes from {}", bytes.len(), endpoint);
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl SearchService for ReqwestSearchService {
    async fn start_search(&self, request: &StartRequest) -> Result<StatusReply, ServiceError> {
        let results_wanted = request.results_wanted.to_string();
        let url = self.endpoint(
            &self.settings.start_path,
            &[
                ("query", request.query.as_str()),
                ("exclude_keywords", request.exclude_keywords.as_str()),
                ("exclude_titles", request.exclude_titles.as_str()),
                ("results_wanted", results_wanted.as_str()),
            ],
        )?;
        let bytes = self.get_bytes(url).await?;
        decode_status(&bytes)
    }

    async fn fetch_results(&self, query: &str) -> Result<FetchReply, ServiceError> {
        let url = self.endpoint(&self.settings.fetch_path, &[("query", query)])?;
        let bytes = self.get_bytes(url).await?;
        decode_fetch(&bytes)
    }

    async fn health(&self) -> Result<StatusReply, ServiceError> {
        let url = self.endpoint(&self.settings.health_path, &[])?;
        let bytes = self.get_bytes(url).await?;
        decode_status(&bytes)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> ServiceError {
    ServiceError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ServiceError::new(FailureKind::Decode, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
