use linkvault::errors::{Result, VaultError};
use linkvault::utils::url_validator::validate_url;
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_database_connection_error() {
        let error = VaultError::database_connection("连接失败");

        assert!(matches!(error, VaultError::DatabaseConnection(_)));
        assert!(error.to_string().contains("Database Connection Error"));
        assert!(error.to_string().contains("连接失败"));
    }

    #[test]
    fn test_validation_error() {
        let error = VaultError::validation("Title is required");

        assert!(matches!(error, VaultError::Validation(_)));
        assert_eq!(error.to_string(), "Validation Error: Title is required");
    }

    #[test]
    fn test_not_found_error() {
        let error = VaultError::not_found("Link not found: abc");

        assert!(error.is_not_found());
        assert!(!VaultError::validation("x").is_not_found());
        assert_eq!(error.message(), "Link not found: abc");
    }

    #[test]
    fn test_error_codes_are_unique() {
        let errors = [
            VaultError::database_config(""),
            VaultError::database_connection(""),
            VaultError::database_operation(""),
            VaultError::validation(""),
            VaultError::invalid_url(""),
            VaultError::not_found(""),
            VaultError::serialization(""),
            VaultError::file_operation(""),
            VaultError::config(""),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.first(), Some(&"E001"));
        assert_eq!(codes.last(), Some(&"E009"));
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_format_colored_contains_code_and_message() {
        colored::control::set_override(false);
        let error = VaultError::invalid_url("bad scheme");
        let output = error.format_colored();
        assert!(output.contains("[ERROR]"));
        assert!(output.contains("E005"));
        assert!(output.contains("bad scheme"));
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_db_err() {
        let error: VaultError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(matches!(error, VaultError::DatabaseOperation(_)));
        assert!(error.message().contains("boom"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let error: VaultError = io.into();
        assert!(matches!(error, VaultError::FileOperation(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: VaultError = json_err.into();
        assert!(matches!(error, VaultError::Serialization(_)));
    }

    #[test]
    fn test_from_url_validation_error() {
        let err = validate_url("javascript:alert(1)").unwrap_err();
        let error: VaultError = err.into();
        assert!(matches!(error, VaultError::InvalidUrl(_)));
        assert!(error.message().contains("javascript"));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(url: &str) -> Result<String> {
            Ok(validate_url(url)?)
        }

        assert_eq!(parse(" https://example.com ").unwrap(), "https://example.com");
        assert!(parse("").is_err());
    }

    #[test]
    fn test_is_std_error() {
        let error = VaultError::config("bad value");
        let boxed: Box<dyn Error> = Box::new(error);
        assert!(boxed.source().is_none());
    }
}
