//! Catalog configuration.

use storefront_core::{DomainError, DomainResult};

/// Maximum number of entries either search returns unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Environment variable overriding [`CatalogConfig::result_limit`].
pub const RESULT_LIMIT_ENV: &str = "STOREFRONT_RESULT_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Cap applied to both search operations.
    pub result_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    ///
    /// An unset variable falls back to the default limit.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_var(std::env::var(RESULT_LIMIT_ENV))
    }

    fn from_var(var: Result<String, std::env::VarError>) -> DomainResult<Self> {
        match var {
            Ok(raw) => Self::parse_limit(&raw),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(DomainError::validation(format!(
                "{RESULT_LIMIT_ENV} is not valid unicode"
            ))),
        }
    }

    fn parse_limit(raw: &str) -> DomainResult<Self> {
        let result_limit: usize = raw.trim().parse().map_err(|e| {
            DomainError::validation(format!("{RESULT_LIMIT_ENV}={raw:?}: {e}"))
        })?;
        if result_limit == 0 {
            return Err(DomainError::validation(format!(
                "{RESULT_LIMIT_ENV} must be greater than zero"
            )));
        }
        Ok(Self { result_limit })
    }
}
