use chrono::NaiveDate;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_movie_id(id: u64) -> Result<(), AppError> {
        if id == 0 {
            return Err(AppError::InvalidInput(
                "Movie ID must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_vote_average(vote_average: f64) -> Result<(), AppError> {
        if !(0.0..=10.0).contains(&vote_average) {
            return Err(AppError::InvalidInput(format!(
                "Vote average must be between 0 and 10, got {}",
                vote_average
            )));
        }
        Ok(())
    }

    /// Release dates are ISO `YYYY-MM-DD`; empty strings are accepted and mean "unknown".
    pub fn validate_release_date(date: &str) -> Result<(), AppError> {
        if date.is_empty() {
            return Ok(());
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|e| AppError::InvalidInput(format!("Invalid release date '{}': {}", date, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_average_bounds() {
        assert!(Validator::validate_vote_average(0.0).is_ok());
        assert!(Validator::validate_vote_average(10.0).is_ok());
        assert!(Validator::validate_vote_average(10.1).is_err());
        assert!(Validator::validate_vote_average(-0.5).is_err());
    }

    #[test]
    fn test_release_date() {
        assert!(Validator::validate_release_date("2010-07-15").is_ok());
        assert!(Validator::validate_release_date("").is_ok());
        assert!(Validator::validate_release_date("15/07/2010").is_err());
    }
}
