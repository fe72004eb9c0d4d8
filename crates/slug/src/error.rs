use thiserror::Error;

/// Errors raised while configuring a slug engine.
///
/// Slug generation itself never fails; every error surfaces when the
/// configuration is built or changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
