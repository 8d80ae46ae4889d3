//! Error types for the DOM model and views

use thiserror::Error;

/// Errors raised by the retained DOM
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Selector is empty or uses syntax beyond compound simple selectors
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Markup parsed to no element at all
    #[error("Markup contains no element")]
    EmptyMarkup,

    /// Tried to insert a node into itself or one of its descendants
    #[error("Hierarchy request error: node cannot be inserted into its own subtree")]
    HierarchyRequest,

    /// Operation needs a parent but the element is not attached
    #[error("Element has no parent")]
    Detached,
}

/// Errors raised by views
#[derive(Error, Debug)]
pub enum ViewError {
    /// Underlying DOM operation failed
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    /// The view's markup has no element matching a selector it relies on
    #[error("Element not found for selector: {0}")]
    MissingElement(String),
}

/// Result type alias using ViewError
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ViewError::MissingElement(".film-details__close-btn".to_string());
        assert_eq!(
            format!("{}", err),
            "Element not found for selector: .film-details__close-btn"
        );
    }

    #[test]
    fn test_error_from_dom() {
        let view_err: ViewError = DomError::EmptyMarkup.into();
        assert!(matches!(view_err, ViewError::Dom(DomError::EmptyMarkup)));
    }
}
