use crate::error::InternalError;
use serde::{Deserialize, Serialize};

///
/// CONSTANTS
///

/// Default bound for untrusted skiptoken input, in bytes.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 8 * 1024;

/// Default bound on the number of steps in one ordering path.
pub const DEFAULT_MAX_PATH_DEPTH: usize = 8;

pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

///
/// CursorConfig
///
/// Limits and defaults for cursor pagination. Built once by the caller and
/// passed by reference; missing keys fall back to the defaults above.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    pub max_token_len: usize,
    pub max_path_depth: usize,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl CursorConfig {
    /// Reject limits that would make every request fail.
    pub fn validate(&self) -> Result<(), InternalError> {
        if self.max_token_len == 0 {
            return Err(InternalError::config_unsupported(
                "max_token_len must be greater than zero",
            ));
        }
        if self.max_path_depth == 0 {
            return Err(InternalError::config_unsupported(
                "max_path_depth must be greater than zero",
            ));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(InternalError::config_unsupported(
                "page sizes must be greater than zero",
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(InternalError::config_unsupported(format!(
                "default_page_size {} exceeds max_page_size {}",
                self.default_page_size, self.max_page_size
            )));
        }

        Ok(())
    }

    /// Resolve the effective page size for an optional client `$top`.
    ///
    /// Never zero: a `$top` of zero serves one row, so a page over remaining
    /// rows always carries a next token.
    #[must_use]
    pub fn page_size(&self, top: Option<usize>) -> usize {
        top.unwrap_or(self.default_page_size)
            .min(self.max_page_size)
            .max(1)
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            max_path_depth: DEFAULT_MAX_PATH_DEPTH,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

///
/// TESTS
///
