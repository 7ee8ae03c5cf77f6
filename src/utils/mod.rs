pub mod errors;

pub use errors::ServiceError;

/// Return the trimmed value of a required query parameter, treating blank as absent
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Fail with a 400 naming every absent parameter, in the order given
pub fn require_params(params: &[(&str, Option<&str>)]) -> Result<(), ServiceError> {
    let missing: Vec<&str> = params
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::BadRequest(format!(
            "Missing required parameters: {}",
            missing.join(", ")
        )))
    }
}
