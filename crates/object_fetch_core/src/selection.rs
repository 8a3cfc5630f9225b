use crate::contract::FetchRequest;

/// The terminal result of one fetch attempt, in the order it completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success {
        request: FetchRequest,
        body: Vec<u8>,
    },
    Failure {
        request: FetchRequest,
        message: String,
    },
}

impl FetchOutcome {
    pub fn request(&self) -> &FetchRequest {
        match self {
            Self::Success { request, .. } | Self::Failure { request, .. } => request,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Picks the single outcome a batch reports. Failure takes priority: the
/// first-completed failure wins if any fetch failed, otherwise the
/// first-completed success. Outcomes must already be in completion order.
pub fn select_outcome(outcomes: &[FetchOutcome]) -> Option<&FetchOutcome> {
    outcomes
        .iter()
        .find(|outcome| outcome.is_failure())
        .or_else(|| outcomes.first())
}
