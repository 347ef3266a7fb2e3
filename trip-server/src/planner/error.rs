//! Plan synthesis errors.

/// Errors from building a plan.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// No usable country remained after cleaning the chain.
    #[error("country chain is empty after cleaning")]
    EmptyChain,

    /// The request failed validation.
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),
}
