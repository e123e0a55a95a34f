//! Scholarship search query parsing.

use crate::server::{error::AppError, util::parse::parse_u64_param};

pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated free-text filter plus offset pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct ScholarshipSearch {
    /// Trimmed search text; `None` when absent or blank.
    pub text: Option<String>,
    /// Zero-based page number.
    pub page: u64,
    /// Number of records per page.
    pub size: u64,
}

impl ScholarshipSearch {
    /// Builds a search from raw query parameters.
    ///
    /// Missing `page` and `size` default to `0` and `10`. Blank search text means
    /// no filter.
    ///
    /// # Returns
    /// - `Ok(ScholarshipSearch)` - Validated search
    /// - `Err(AppError::BadRequest)` - Non-numeric page/size, size outside `1..=100`, or
    ///   a `page * size` offset the store cannot address
    pub fn from_query(
        search: Option<&str>,
        page: Option<&str>,
        size: Option<&str>,
    ) -> Result<Self, AppError> {
        let page = parse_u64_param("page", page, DEFAULT_PAGE)?;
        let size = parse_u64_param("size", size, DEFAULT_PAGE_SIZE)?;

        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "Query parameter 'size' must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        page
            .checked_mul(size)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| {
                AppError::BadRequest(format!("Query parameter 'page' is out of range: {}", page))
            })?;

        Ok(Self {
            text: normalize_search_text(search),
            page,
            size,
        })
    }
}

/// Trims search text, mapping blank input to no filter.
pub fn normalize_search_text(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
