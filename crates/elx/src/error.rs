//! Builder errors

use elx_dom::DomError;

/// Result type for element construction
pub type Result<T> = std::result::Result<T, BuildError>;

/// Element construction errors.
///
/// Construction is permissive; only tree-integrity violations surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Dom(#[from] DomError),
}
