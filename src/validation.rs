use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Parses the `p` query parameter. Absent or blank means the first page;
/// range clamping is left to the service.
pub fn validate_page(page: Option<&str>) -> Result<i64, ValidationError> {
    match page.map(str::trim) {
        None | Some("") => Ok(1),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidParameter(format!("page must be an integer, got '{}'", raw))),
    }
}

/// Parses the optional `block` query parameter into a block height.
pub fn validate_block(block: Option<&str>) -> Result<Option<i64>, ValidationError> {
    match block.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => match raw.parse::<i64>() {
            Ok(height) if height >= 0 => Ok(Some(height)),
            _ => Err(ValidationError::InvalidParameter(format!(
                "block must be a non-negative integer, got '{}'",
                raw
            ))),
        },
    }
}

/// Normalizes the optional `a` query parameter. A blank address is the same
/// as no address.
pub fn normalize_address(address: Option<&str>) -> Option<&str> {
    address.map(str::trim).filter(|a| !a.is_empty())
}

pub fn validate_tx_hash(hash: &str) -> Result<&str, ValidationError> {
    let hash = hash.trim();
    if hash.is_empty() {
        return Err(ValidationError::MissingParameter("hash".to_string()));
    }
    Ok(hash)
}
