//! Compound simple selectors: `tag`, `#id`, `.class` and combinations
//! such as `button.film-details__close-btn`. Combinators, attribute and
//! pseudo-class selectors are rejected.

use std::str::FromStr;

use super::node::Element;
use crate::error::DomError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let invalid = || DomError::InvalidSelector(input.to_string());
        let source = input.trim();
        if source.is_empty() {
            return Err(invalid());
        }

        let mut selector = Selector::default();
        let tag_end = source.find(['.', '#']).unwrap_or(source.len());
        let (tag, mut rest) = source.split_at(tag_end);

        if !tag.is_empty() && tag != "*" {
            if !is_identifier(tag) {
                return Err(invalid());
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(marker) = rest.chars().next() {
            // markers are ASCII, so slicing past them is on a char boundary
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if !is_identifier(name) {
                return Err(invalid());
            }

            match marker {
                '.' => selector.classes.push(name.to_string()),
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                _ => return Err(invalid()),
            }
            rest = &body[end..];
        }

        Ok(selector)
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag_name() != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id().as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Element {
        let element = Element::new("button");
        element.set_attribute("id", "watchlist");
        element.set_attribute(
            "class",
            "film-details__control-button film-details__control-button--watchlist",
        );
        element
    }

    #[test]
    fn parses_compound_selector() {
        let selector: Selector = "button#watchlist.film-details__control-button".parse().unwrap();
        assert!(selector.matches(&button()));
    }

    #[test]
    fn class_selector_needs_every_class() {
        let selector = Selector::parse(".film-details__control-button.missing").unwrap();
        assert!(!selector.matches(&button()));
    }

    #[test]
    fn tag_and_universal() {
        assert!(Selector::parse("BUTTON").unwrap().matches(&button()));
        assert!(Selector::parse("*").unwrap().matches(&button()));
        assert!(!Selector::parse("section").unwrap().matches(&button()));
    }

    #[test]
    fn rejects_unsupported_syntax() {
        for input in ["", "   ", "section button", "div > p", "[name=x]", "a:hover", ".", "#a#b", "a..b"] {
            assert_eq!(
                Selector::parse(input),
                Err(DomError::InvalidSelector(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }
}
