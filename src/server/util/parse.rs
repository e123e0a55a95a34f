use crate::server::error::AppError;

/// Longest prefix considered when parsing a rating.
const MAX_RATING_PREFIX: usize = 32;

/// Parses a stored rating into a number, the lenient way.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"4.5 stars"` yields `4.5`. Missing, unparsable and non-finite values yield `0.0`.
///
/// # Arguments
/// - `value` - Rating text as stored, if any
///
/// # Returns
/// - `f64` - Parsed finite rating, or `0.0`
pub fn parse_rating(value: Option<&str>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };

    let trimmed = value.trim_start();
    let candidate: String = trimmed.chars().take(MAX_RATING_PREFIX).collect();

    candidate
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|rating| rating.is_finite())
        .unwrap_or(0.0)
}

/// Parses a store identifier from its string form.
///
/// # Arguments
/// - `value` - Identifier as received in a path or body
///
/// # Returns
/// - `Ok(i32)` - Parsed identifier
/// - `Err(AppError::BadRequest)` - Value is not a valid identifier
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid identifier '{}'", value)))
}

/// Parses an optional non-negative integer query parameter.
///
/// Absent or blank values fall back to `default`.
///
/// # Arguments
/// - `name` - Parameter name used in the error message
/// - `value` - Raw query value
/// - `default` - Value used when the parameter is absent
///
/// # Returns
/// - `Ok(u64)` - Parsed or default value
/// - `Err(AppError::BadRequest)` - Value is present but not a non-negative integer
pub fn parse_u64_param(name: &str, value: Option<&str>, default: u64) -> Result<u64, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            AppError::BadRequest(format!(
                "Query parameter '{}' must be a non-negative integer, got '{}'",
                name, raw
            ))
        }),
    }
}
