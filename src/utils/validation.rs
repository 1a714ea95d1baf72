use crate::utils::error::{ExtensoError, Result};
use percent_encoding::percent_decode_str;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses the number carried by a request path.
///
/// The path is percent-decoded, then one leading `/` is dropped; what remains
/// must be a whole base-10 integer (optional sign, leading zeros allowed).
/// Range checking is left to the translator.
pub fn parse_path(path: &str) -> Result<i64> {
    // invalid UTF-8 becomes U+FFFD and fails as a number
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let input = decoded.strip_prefix('/').unwrap_or(&*decoded);
    parse_number(input)
}

pub fn parse_number(input: &str) -> Result<i64> {
    input
        .parse::<i64>()
        .map_err(|source| ExtensoError::InvalidNumber {
            input: input.to_string(),
            source,
        })
}

/// Accepts `host:port`, including an empty host (`:8080`).
pub fn validate_address(field_name: &str, address: &str) -> Result<()> {
    validate_non_empty_string(field_name, address)?;

    let Some((_, port)) = address.rsplit_once(':') else {
        return Err(ExtensoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Expected host:port".to_string(),
        });
    };

    if port.parse::<u16>().is_err() {
        return Err(ExtensoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: format!("Invalid port: '{}'", port),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExtensoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
