//! Candidate resolution errors.

/// Errors from building a candidate city set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateError {
    /// A country needed for the start or end city has none configured.
    #[error("No cities configured for {role}='{country}'")]
    NoCities { role: &'static str, country: String },
}
