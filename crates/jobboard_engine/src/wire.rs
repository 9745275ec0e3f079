use jobboard_logging::board_warn;
use serde::Deserialize;
use serde_json::Value;

use crate::{FailureKind, FetchReply, ServiceError, StatusReply};

/// A job listing as sent by the service, with missing fields normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    /// `None` when the service sent no date at all.
    pub posted_date: Option<String>,
    pub description: String,
    pub source: String,
    pub job_url: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct FetchBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    jobs: Option<Vec<RawJob>>,
}

// Accepts both the scraper's snake_case and camelCase field names.
#[derive(Debug, Deserialize)]
struct RawJob {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, alias = "postedDate", alias = "date_posted")]
    posted_date: Option<Value>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "site")]
    source: Option<String>,
    #[serde(default, alias = "jobUrl")]
    job_url: Option<String>,
}

impl RawJob {
    fn into_payload(self) -> JobPayload {
        let posted_date = match self.posted_date {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        };
        JobPayload {
            title: self.title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            posted_date,
            description: self.description.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            job_url: self.job_url.unwrap_or_default(),
        }
    }
}

pub(crate) fn decode_status(bytes: &[u8]) -> Result<StatusReply, ServiceError> {
    let body: MessageBody = serde_json::from_slice(bytes)
        .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))?;
    Ok(StatusReply {
        message: body.message,
    })
}

/// A non-empty `message` wins over `jobs`; records without title or company are dropped.
pub(crate) fn decode_fetch(bytes: &[u8]) -> Result<FetchReply, ServiceError> {
    let body: FetchBody = serde_json::from_slice(bytes)
        .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))?;

    if let Some(message) = body.message.filter(|m| !m.is_empty()) {
        return Ok(FetchReply::Message(message));
    }
    let Some(raw_jobs) = body.jobs else {
        return Err(ServiceError::new(
            FailureKind::Decode,
            "response carries neither message nor jobs",
        ));
    };

    let total = raw_jobs.len();
    let jobs: Vec<JobPayload> = raw_jobs
        .into_iter()
        .map(RawJob::into_payload)
        .filter(|job| !job.title.trim().is_empty() && !job.company.trim().is_empty())
        .collect();
    if jobs.len() < total {
        board_warn!(
            "Dropped {} of {} jobs without title or company",
            total - jobs.len(),
            total
        );
    }
    Ok(FetchReply::Jobs(jobs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_takes_precedence_over_jobs() {
        let reply = decode_fetch(br#"{"message":"no jobs found","jobs":[]}"#).unwrap();
        assert_eq!(reply, FetchReply::Message("no jobs found".to_string()));
    }

    #[test]
    fn empty_message_falls_through_to_jobs() {
        let reply = decode_fetch(br#"{"message":"","jobs":[]}"#).unwrap();
        assert_eq!(reply, FetchReply::Jobs(Vec::new()));
    }

    #[test]
    fn missing_fields_get_defaults() {
        let reply = decode_fetch(
            br#"{"jobs":[{"title":"Engineer","company":"Acme","job_url":"http://x","description":null}]}"#,
        )
        .unwrap();
        let FetchReply::Jobs(jobs) = reply else {
            panic!("expected jobs");
        };
        assert_eq!(jobs[0].posted_date, None);
        assert_eq!(jobs[0].description, "");
        assert_eq!(jobs[0].source, "");
        assert_eq!(jobs[0].location, "");
        assert_eq!(jobs[0].job_url, "http://x");
    }

    #[test]
    fn camel_case_fields_are_accepted() {
        let reply = decode_fetch(
            br#"{"jobs":[{"title":"T","company":"C","postedDate":"2024-01-02","jobUrl":"http://y","source":"Indeed"}]}"#,
        )
        .unwrap();
        let FetchReply::Jobs(jobs) = reply else {
            panic!("expected jobs");
        };
        assert_eq!(jobs[0].posted_date.as_deref(), Some("2024-01-02"));
        assert_eq!(jobs[0].job_url, "http://y");
        assert_eq!(jobs[0].source, "Indeed");
    }

    #[test]
    fn records_without_title_or_company_are_dropped() {
        let reply = decode_fetch(
            br#"{"jobs":[{"title":"","company":"Acme"},{"title":"Ok","company":"Acme"},{"title":"No company"}]}"#,
        )
        .unwrap();
        let FetchReply::Jobs(jobs) = reply else {
            panic!("expected jobs");
        };
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Ok");
    }

    #[test]
    fn non_json_or_shapeless_bodies_are_decode_errors() {
        assert_eq!(
            decode_fetch(b"<html>").unwrap_err().kind,
            FailureKind::Decode
        );
        assert_eq!(decode_fetch(b"{}").unwrap_err().kind, FailureKind::Decode);
        assert_eq!(
            decode_status(br#"{"status":"ok"}"#).unwrap_err().kind,
            FailureKind::Decode
        );
    }
}
