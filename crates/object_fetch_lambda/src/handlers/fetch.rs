use std::sync::Arc;
use std::time::Instant;

use aws_lambda_events::event::s3::S3Event;
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::json;

use object_fetch_core::contract::{batch_fingerprint, FetchRequest, ValidationError};
use object_fetch_core::selection::{select_outcome, FetchOutcome};

use crate::adapters::object_store::ObjectStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchHandlerError {
    pub message: String,
}

impl FetchHandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Converts the records of an object-created event into fetch requests,
/// rejecting records with a blank bucket name or object key. Keys are kept
/// exactly as delivered in the event.
pub fn decode_event_records(event: &S3Event) -> Result<Vec<FetchRequest>, ValidationError> {
    let mut requests = Vec::with_capacity(event.records.len());
    for record in &event.records {
        let bucket = record.s3.bucket.name.as_deref().unwrap_or_default();
        let key = record.s3.object.key.as_deref().unwrap_or_default();
        requests.push(FetchRequest::new(bucket, key)?);
    }
    Ok(requests)
}

pub fn format_object_content(body: &[u8]) -> String {
    format!("Object content: {}", String::from_utf8_lossy(body))
}

/// Fetches every requested object concurrently and reports exactly one
/// outcome: the first-completed failure if any fetch failed, otherwise the
/// first-completed success. All fetches run to completion before selection;
/// unselected outcomes are dropped.
pub async fn handle_fetch_event(
    requests: Vec<FetchRequest>,
    store: Arc<dyn ObjectStore>,
) -> Result<String, FetchHandlerError> {
    let started_at = Instant::now();

    if requests.is_empty() {
        log_fetch_error(
            "fetch_batch_rejected",
            json!({ "reason": "event contained no object records" }),
        );
        return Err(FetchHandlerError::new("event contained no object records"));
    }

    let record_count = requests.len();
    let fingerprint = batch_fingerprint(&requests);
    log_fetch_info(
        "fetch_batch_started",
        json!({
            "record_count": record_count,
            "batch_fingerprint": fingerprint.clone(),
        }),
    );

    let mut fetches = FuturesUnordered::new();
    for request in requests {
        let store = Arc::clone(&store);
        fetches.push(async move {
            match store.read_object(&request.bucket, &request.key).await {
                Ok(body) => FetchOutcome::Success { request, body },
                Err(message) => FetchOutcome::Failure { request, message },
            }
        });
    }

    // Barrier: drain every fetch before selecting.
    let mut outcomes = Vec::with_capacity(record_count);
    while let Some(outcome) = fetches.next().await {
        outcomes.push(outcome);
    }

    let failure_count = outcomes.iter().filter(|o| o.is_failure()).count();
    let elapsed_ms = started_at.elapsed().as_millis();

    match select_outcome(&outcomes) {
        Some(FetchOutcome::Success { request, body }) => {
            log_fetch_info(
                "fetch_batch_completed",
                json!({
                    "batch_fingerprint": fingerprint,
                    "selected_bucket": request.bucket.clone(),
                    "selected_key": request.key.clone(),
                    "success_count": record_count - failure_count,
                    "failure_count": failure_count,
                    "duration_ms": elapsed_ms,
                }),
            );
            Ok(format_object_content(body))
        }
        Some(FetchOutcome::Failure { request, message }) => {
            log_fetch_error(
                "fetch_batch_failed",
                json!({
                    "batch_fingerprint": fingerprint,
                    "selected_bucket": request.bucket.clone(),
                    "selected_key": request.key.clone(),
                    "success_count": record_count - failure_count,
                    "failure_count": failure_count,
                    "duration_ms": elapsed_ms,
                    "error": message.clone(),
                }),
            );
            Err(FetchHandlerError::new(message.clone()))
        }
        None => Err(FetchHandlerError::new("event contained no object records")),
    }
}

fn log_fetch_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "fetch_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_fetch_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "fetch_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
