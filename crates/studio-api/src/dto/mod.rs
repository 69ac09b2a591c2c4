//! Request/response DTOs.

pub mod request;
pub mod response;

use chrono::NaiveTime;

use studio_core::error::AppError;
use studio_core::result::AppResult;

/// Parse a clock time from its API form.
///
/// Accepts `HH:MM` (the public form format) and `HH:MM:SS`.
pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("Invalid time '{s}', expected HH:MM")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("10:00").unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("14:30:00").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("10am").is_err());
    }
}
