//! Plan request type.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::geo::Pace;

use super::error::PlanError;

/// A request to synthesize a trip plan.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub from_country: String,
    pub to_country: String,
    pub budget_usd: f64,
    /// Opaque; only checked for presence.
    pub start_date: String,
    /// Opaque; only checked for presence.
    pub end_date: String,
    /// Not used by the planner yet.
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub pace: Pace,
    /// Explicit ordered countries; overrides from/to when non-empty.
    #[serde(default)]
    pub country_chain: Option<Vec<String>>,
}

impl PlanRequest {
    /// Create a request for a simple from/to trip.
    pub fn new(
        from_country: impl Into<String>,
        to_country: impl Into<String>,
        budget_usd: f64,
    ) -> Self {
        Self {
            from_country: from_country.into(),
            to_country: to_country.into(),
            budget_usd,
            start_date: String::new(),
            end_date: String::new(),
            interests: Vec::new(),
            pace: Pace::default(),
            country_chain: None,
        }
    }

    /// Set the travel dates.
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    /// Set the pace.
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Set an explicit country chain.
    pub fn with_chain<I, S>(mut self, chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.country_chain = Some(chain.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.budget_usd.is_finite() || self.budget_usd < 0.0 {
            return Err(PlanError::InvalidRequest(
                "budget_usd must be a non-negative number".to_string(),
            ));
        }

        if self.start_date.trim().is_empty() {
            return Err(PlanError::InvalidRequest(
                "start_date is required".to_string(),
            ));
        }

        if self.end_date.trim().is_empty() {
            return Err(PlanError::InvalidRequest("end_date is required".to_string()));
        }

        Ok(())
    }

    /// The countries to visit before cleaning.
    pub fn raw_chain(&self) -> Vec<&str> {
        match &self.country_chain {
            Some(chain) if !chain.is_empty() => chain.iter().map(String::as_str).collect(),
            _ => vec![self.from_country.as_str(), self.to_country.as_str()],
        }
    }

    /// Inclusive trip length in days, when both dates are ISO `YYYY-MM-DD`
    /// and the end is not before the start.
    pub fn trip_days(&self) -> Option<i64> {
        let start = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(self.end_date.trim(), "%Y-%m-%d").ok()?;
        let days = (end - start).num_days();
        (days >= 0).then_some(days + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanRequest {
        PlanRequest::new("France", "Italy", 2000.0).with_dates("2025-06-01", "2025-06-08")
    }

    #[test]
    fn valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rejects_negative_budget() {
        let mut req = request();
        req.budget_usd = -1.0;
        assert!(matches!(req.validate(), Err(PlanError::InvalidRequest(_))));

        req.budget_usd = f64::NAN;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_missing_dates() {
        let req = PlanRequest::new("France", "Italy", 100.0).with_dates("", "2025-06-08");
        assert!(req.validate().is_err());

        let req = PlanRequest::new("France", "Italy", 100.0).with_dates("2025-06-01", "  ");
        assert!(req.validate().is_err());
    }

    #[test]
    fn raw_chain_prefers_explicit_chain() {
        let req = request().with_chain(["Spain", "France", "Italy"]);
        assert_eq!(req.raw_chain(), vec!["Spain", "France", "Italy"]);
    }

    #[test]
    fn empty_chain_falls_back_to_endpoints() {
        let req = request().with_chain(Vec::<String>::new());
        assert_eq!(req.raw_chain(), vec!["France", "Italy"]);
    }

    #[test]
    fn trip_days_inclusive() {
        assert_eq!(request().trip_days(), Some(8));
        let same_day = request().with_dates("2025-06-01", "2025-06-01");
        assert_eq!(same_day.trip_days(), Some(1));
    }

    #[test]
    fn trip_days_unknown_for_bad_dates() {
        assert_eq!(request().with_dates("June 1", "June 8").trip_days(), None);
        assert_eq!(
            request().with_dates("2025-06-08", "2025-06-01").trip_days(),
            None
        );
    }

    #[test]
    fn deserialize_defaults() {
        let req: PlanRequest = serde_json::from_str(
            r#"{
                "from_country": "France",
                "to_country": "Italy",
                "budget_usd": 2000,
                "start_date": "2025-06-01",
                "end_date": "2025-06-08"
            }"#,
        )
        .unwrap();
        assert_eq!(req.pace, Pace::Balanced);
        assert!(req.interests.is_empty());
        assert!(req.country_chain.is_none());
    }
}
