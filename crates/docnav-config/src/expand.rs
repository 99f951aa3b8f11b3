//! `${VAR}` expansion for URL-valued configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// `${VAR}` requires VAR to be set; `${VAR:-default}` falls back to the
/// default. Only braced references are expanded: a bare `$name` in a URL
/// is kept as written.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let braced = braced_names(value);
    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        if !braced.iter().any(|name| *name == var) {
            return Ok(Some(format!("${var}")));
        }
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Names referenced as `${NAME}` or `${NAME:-default}`.
fn braced_names(value: &str) -> Vec<&str> {
    value
        .split("${")
        .skip(1)
        .filter_map(|rest| {
            let end = rest.find(['}', ':'])?;
            Some(&rest[..end])
        })
        .collect()
}

/// Expand an optional value in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value.as_deref() {
        *value = Some(expand_env(v, field)?);
    }
    Ok(())
}

/// Lookup failure for a referenced variable.
struct UnsetVar {
    name: String,
}
