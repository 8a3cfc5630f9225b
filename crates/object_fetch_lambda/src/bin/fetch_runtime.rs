use std::sync::Arc;

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use object_fetch_lambda::adapters::object_store::ObjectStore;
use object_fetch_lambda::handlers::fetch::{decode_event_records, handle_fetch_event};

const FALLBACK_REGION: &str = "eu-north-1";

struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn read_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|error| format!("failed to get object, {error}"))?;

        let body = response
            .body
            .collect()
            .await
            .map_err(|error| format!("failed to read object body, {error}"))?;

        Ok(body.into_bytes().to_vec())
    }
}

async fn handle_request(
    event: LambdaEvent<S3Event>,
    store: Arc<dyn ObjectStore>,
) -> Result<String, Error> {
    let requests = decode_event_records(&event.payload)
        .map_err(|error| Error::from(format!("invalid object record: {error}")))?;

    handle_fetch_event(requests, store)
        .await
        .map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // SDK configuration is resolved once per process and shared read-only
    // across invocations and concurrent fetches.
    let region_provider = RegionProviderChain::default_provider().or_else(FALLBACK_REGION);
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore {
        client: aws_sdk_s3::Client::new(&aws_config),
    });

    run(service_fn(move |event| {
        let store = Arc::clone(&store);
        async move { handle_request(event, store).await }
    }))
    .await
}
