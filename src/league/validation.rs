use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("scores must be non-negative integers")]
    NegativeScore,
}

/// Centralized validation for league operations
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a score entry before it touches storage. Non-integer
    /// input never reaches this point (the request type is integral);
    /// negative values are rejected here.
    pub fn validate_match_result(&self, score1: i32, score2: i32) -> Result<(), ValidationError> {
        if score1 < 0 || score2 < 0 {
            return Err(ValidationError::NegativeScore);
        }
        Ok(())
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_scores_pass() {
        let validator = LeagueValidator::new();
        assert!(validator.validate_match_result(0, 0).is_ok());
        assert!(validator.validate_match_result(10, 3).is_ok());
    }

    #[test]
    fn negative_scores_are_rejected() {
        let validator = LeagueValidator::new();
        assert_eq!(
            validator.validate_match_result(-1, 2),
            Err(ValidationError::NegativeScore)
        );
        assert_eq!(
            validator.validate_match_result(1, -2),
            Err(ValidationError::NegativeScore)
        );
    }
}
