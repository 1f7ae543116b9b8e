//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RestrictConfig;
use crate::config::validation::ValidationError;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML config file without validating it.
///
/// Callers apply CLI overrides first and then run
/// [`validate_config`](crate::config::validate_config).
pub fn read_config(path: &Path) -> Result<RestrictConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("client-restrict-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_valid_file() {
        let path = write_temp("valid.toml", "[access]\nallowed_ip = \"192.0.2.10\"\n");
        let config = read_config(&path).unwrap();
        assert_eq!(config.access.allowed_ip, "192.0.2.10");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = read_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let path = write_temp("broken.toml", "[access\nallowed_ip = 1");
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyAllowedIp,
            ValidationError::ZeroRequestTimeout,
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: access.allowed_ip must not be empty, \
             timeouts.request_secs must be greater than zero"
        );
    }

    #[test]
    fn test_empty_allowed_ip_is_read_unvalidated() {
        let path = write_temp("empty.toml", "[access]\nallowed_ip = \"\"\n");
        let config = read_config(&path).unwrap();
        assert_eq!(config.access.allowed_ip, "");
        fs::remove_file(path).unwrap();
    }
}
