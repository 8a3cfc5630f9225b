use async_trait::async_trait;

/// Read access to an object store. Implementations must buffer the full
/// object body and release the underlying response resource on every exit
/// path, success or failure.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn read_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String>;
}
