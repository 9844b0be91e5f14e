//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `field` names the config key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SMU_DOCS_EXPAND_UNSET");
        }

        let value = expand_env("${SMU_DOCS_EXPAND_UNSET:-0.0.0.0}", "server.host").unwrap();

        assert_eq!(value, "0.0.0.0");
    }

    #[test]
    fn test_set_variable_expanded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SMU_DOCS_EXPAND_SET", "docs.internal");
        }

        let value = expand_env("${SMU_DOCS_EXPAND_SET}", "server.host").unwrap();

        assert_eq!(value, "docs.internal");

        unsafe {
            std::env::remove_var("SMU_DOCS_EXPAND_SET");
        }
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SMU_DOCS_EXPAND_MISSING");
        }

        let err = expand_env("${SMU_DOCS_EXPAND_MISSING}", "docs.source_dir").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("SMU_DOCS_EXPAND_MISSING"), "got {msg}");
        assert!(msg.contains("docs.source_dir"), "got {msg}");
    }
}
