use chrono::{DateTime, Utc};

/// An operator's console session. Polling runs only while one exists.
///
/// There is no authentication here; the name is what the header shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub operator: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Open a session for the named operator
    ///
    /// # Errors
    ///
    /// Returns an error if the operator name is blank.
    pub fn start(operator: &str) -> Result<Self, String> {
        Self::start_at(operator, Utc::now())
    }

    /// Open a session with an explicit start time
    ///
    /// # Errors
    ///
    /// Returns an error if the operator name is blank.
    pub fn start_at(operator: &str, started_at: DateTime<Utc>) -> Result<Self, String> {
        let operator = operator.trim();
        if operator.is_empty() {
            return Err("Operator name is required".to_string());
        }
        Ok(Self {
            operator: operator.to_string(),
            started_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_trims_operator() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).single().expect("valid time");
        let session = Session::start_at("  controller-1 ", at).expect("session should start");
        assert_eq!(session.operator, "controller-1");
        assert_eq!(session.started_at, at);
    }

    #[test]
    fn test_blank_operator_rejected() {
        assert!(Session::start("   ").is_err());
    }
}
