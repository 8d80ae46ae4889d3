//! Mounting views into containers

use std::any::type_name;

use tracing::debug;

use super::view::View;
use crate::dom::Element;
use crate::error::ViewResult;

/// Where a view's element goes relative to the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPosition {
    /// Previous sibling of the container
    BeforeBegin,
    /// First child of the container
    AfterBegin,
    /// Last child of the container
    #[default]
    BeforeEnd,
    /// Next sibling of the container
    AfterEnd,
}

/// Insert `view`'s root element relative to `container`, materializing it
/// if needed.
pub fn render<V>(view: &V, container: &Element, position: RenderPosition) -> ViewResult<()>
where
    V: View + ?Sized,
{
    let element = view.element()?;
    match position {
        RenderPosition::BeforeBegin => container.before(&element)?,
        RenderPosition::AfterBegin => container.prepend_child(&element)?,
        RenderPosition::BeforeEnd => container.append_child(&element)?,
        RenderPosition::AfterEnd => container.after(&element)?,
    }

    debug!(
        view = type_name::<V>(),
        container = %container.tag_name(),
        ?position,
        "rendered view"
    );
    Ok(())
}

/// Put `new_view`'s element where `old_view`'s element currently is.
///
/// Fails with [`crate::DomError::Detached`] when the old element has no parent.
pub fn replace<N, O>(new_view: &N, old_view: &O) -> ViewResult<()>
where
    N: View + ?Sized,
    O: View + ?Sized,
{
    let new_element = new_view.element()?;
    let old_element = old_view.element()?;
    old_element.replace_with(&new_element)?;
    Ok(())
}

/// Detach `view`'s element from the document and drop its cache.
///
/// A view that was never materialized is left as is.
pub fn remove<V>(view: &V)
where
    V: View + ?Sized,
{
    if let Some(element) = view.base().cached_element() {
        element.remove();
    }
    view.remove_element();
}
