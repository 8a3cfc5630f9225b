use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One object to retrieve, identified by its bucket and key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchRequest {
    pub bucket: String,
    pub key: String,
}

impl FetchRequest {
    /// Builds a request, rejecting blank identifiers. Bucket names cannot
    /// contain whitespace and are trimmed; object keys may contain interior
    /// whitespace and are kept verbatim.
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<FetchRequest, ValidationError> {
        let bucket = bucket.into().trim().to_string();
        if bucket.is_empty() {
            return Err(ValidationError::new("bucket name cannot be empty"));
        }

        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::new("object key cannot be empty"));
        }

        Ok(FetchRequest { bucket, key })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn stable_contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of contract value should not fail")
}

/// Fingerprint of a request batch, used to correlate at-least-once
/// redeliveries of the same event in structured logs.
pub fn batch_fingerprint(requests: &[FetchRequest]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(stable_contract_json(requests));
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_bucket_name() {
        let error = FetchRequest::new("  ", "some/key").expect_err("request should fail");
        assert_eq!(error.message(), "bucket name cannot be empty");
    }

    #[test]
    fn rejects_whitespace_object_key() {
        let error = FetchRequest::new("uploads", "   ").expect_err("request should fail");
        assert_eq!(error.message(), "object key cannot be empty");
    }

    #[test]
    fn keeps_object_key_verbatim() {
        let request =
            FetchRequest::new(" uploads ", "reports/2026 q3.csv").expect("request should pass");
        assert_eq!(request.bucket, "uploads");
        assert_eq!(request.key, "reports/2026 q3.csv");
    }

    #[test]
    fn fingerprint_is_stable_for_identical_batches() {
        let batch_a = vec![
            FetchRequest::new("uploads", "a.txt").expect("request should pass"),
            FetchRequest::new("uploads", "b.txt").expect("request should pass"),
        ];
        let batch_b = batch_a.clone();

        assert_eq!(batch_fingerprint(&batch_a), batch_fingerprint(&batch_b));
    }

    #[test]
    fn fingerprint_differs_for_different_batches() {
        let batch_a = vec![FetchRequest::new("uploads", "a.txt").expect("request should pass")];
        let batch_b = vec![FetchRequest::new("uploads", "b.txt").expect("request should pass")];

        assert_ne!(batch_fingerprint(&batch_a), batch_fingerprint(&batch_b));
    }
}
