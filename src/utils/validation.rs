use crate::core::reduction::is_master;
use crate::utils::error::{NumerologyError, Result};
use chrono::{Datelike, NaiveDate};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 解析出生日期 (YYYY-MM-DD)
pub fn parse_birth_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NumerologyError::invalid_input(
            field_name,
            value,
            "Date cannot be empty",
        ));
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
        NumerologyError::invalid_input(field_name, value, format!("Invalid date: {}", e))
    })?;
    validate_range(field_name, date.year(), 1, 9999)?;
    Ok(date)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NumerologyError::invalid_input(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| NumerologyError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(NumerologyError::invalid_input(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// 目標數字必須是 1-9 或主數 11/22/33
pub fn validate_target_numbers(field_name: &str, targets: &[u32]) -> Result<()> {
    for &target in targets {
        if !((1..=9).contains(&target) || is_master(target)) {
            return Err(NumerologyError::invalid_input(
                field_name,
                target,
                "Target numbers must be 1-9, 11, 22 or 33",
            ));
        }
    }
    Ok(())
}

pub fn validate_minimum_participants(actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(NumerologyError::InsufficientParticipants { required, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birth_date() {
        let date = parse_birth_date("birth_date", "1990-05-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());

        assert!(parse_birth_date("birth_date", " 2000-01-01 ").is_ok());
        assert!(parse_birth_date("birth_date", "").is_err());
        assert!(parse_birth_date("birth_date", "1990-02-30").is_err());
        assert!(parse_birth_date("birth_date", "15/05/1990").is_err());
        assert!(parse_birth_date("birth_date", "0000-01-01").is_err());
    }

    #[test]
    fn test_invalid_date_is_invalid_input() {
        match parse_birth_date("birth_date", "not-a-date") {
            Err(NumerologyError::InvalidInput { field, .. }) => assert_eq!(field, "birth_date"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_target_numbers() {
        assert!(validate_target_numbers("targets", &[1, 5, 9, 11, 22, 33]).is_ok());
        assert!(validate_target_numbers("targets", &[0]).is_err());
        assert!(validate_target_numbers("targets", &[10]).is_err());
        assert!(validate_target_numbers("targets", &[44]).is_err());
    }

    #[test]
    fn test_validate_minimum_participants() {
        assert!(validate_minimum_participants(3, 3).is_ok());
        assert!(matches!(
            validate_minimum_participants(2, 3),
            Err(NumerologyError::InsufficientParticipants {
                required: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Maria").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
