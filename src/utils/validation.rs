use crate::utils::error::{ReceiptError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_existing_file(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if !Path::new(path).is_file() {
        return Err(ReceiptError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File does not exist".to_string(),
        });
    }

    Ok(())
}

pub fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        return Ok(());
    }

    Err(ReceiptError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "receiptsmini.txt").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_existing_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        assert!(validate_existing_file("input", path).is_ok());
        assert!(validate_existing_file("input", "/definitely/not/here.txt").is_err());
    }

    #[test]
    fn test_validate_choice() {
        assert!(validate_choice("format", "json", &["text", "json", "csv"]).is_ok());
        assert!(validate_choice("format", "CSV", &["text", "json", "csv"]).is_ok());

        match validate_choice("format", "xml", &["text", "json"]) {
            Err(ReceiptError::InvalidConfigValueError { field, reason, .. }) => {
                assert_eq!(field, "format");
                assert!(reason.contains("text, json"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
