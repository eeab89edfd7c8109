use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an environment variable, falling back to `default` if it's missing.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
/// * `default` - The value returned when the variable is not set.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_reports_its_name() {
        let err = get_env_var("SHARED_UTILS_TEST_UNSET_VAR").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHARED_UTILS_TEST_UNSET_VAR"
        );
    }

    #[test]
    fn fallback_is_used_when_var_is_unset() {
        let value = get_env_var_or("SHARED_UTILS_TEST_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }
}
