//! Markup to retained DOM, via html5ever through `scraper`

use scraper::{ElementRef, Html, Node as HtmlNode};

use super::node::Element;
use crate::error::DomError;

/// Parse `markup` as a body fragment and return its first element.
///
/// Mirrors assigning to `innerHTML` of a scratch container and taking
/// `firstElementChild`: leading text and anything after the first element
/// is discarded. The returned element is detached.
pub fn create_element(markup: &str) -> Result<Element, DomError> {
    let fragment = Html::parse_fragment(markup);
    let first = fragment
        .root_element()
        .children()
        .find_map(ElementRef::wrap)
        .ok_or(DomError::EmptyMarkup)?;

    Ok(convert(first))
}

fn convert(source: ElementRef<'_>) -> Element {
    let html_element = source.value();
    let element = Element::new(html_element.name());
    for (name, value) in html_element.attrs() {
        element.set_attribute(name, value);
    }

    for child in source.children() {
        match child.value() {
            HtmlNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    element.push_child(convert(child_element));
                }
            }
            HtmlNode::Text(text) => {
                let content: &str = text;
                element.append_text(content);
            }
            _ => {}
        }
    }

    element
}
