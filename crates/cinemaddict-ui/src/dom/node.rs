//! Element handles and tree operations

use std::cell::RefCell;
use std::fmt;
use std::fmt::Write as _;
use std::rc::{Rc, Weak};

use super::event::{Event, EventKind, Listener};
use super::selector::Selector;
use crate::error::DomError;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    parent: Weak<RefCell<ElementData>>,
    listeners: Vec<RegisteredListener>,
}

struct RegisteredListener {
    kind: EventKind,
    key: &'static str,
    handler: Listener,
}

/// A child of an element
#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    fn is_element(&self, element: &Element) -> bool {
        matches!(self, Node::Element(e) if e.is_same_node(element))
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_outer_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_text_content(out),
            Node::Text(text) => out.push_str(text),
        }
    }
}

/// Shared handle to an element.
///
/// Cloning the handle does not clone the element: all clones point at the
/// same node, and [`PartialEq`] compares node identity.
#[derive(Clone)]
pub struct Element(Rc<RefCell<ElementData>>);

/// Non-owning handle, for listeners that must refer back to an ancestor
/// without keeping it alive.
#[derive(Clone, Default)]
pub struct WeakElement(Weak<RefCell<ElementData>>);

impl WeakElement {
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl Element {
    /// Create a detached element with no attributes or children
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent: Weak::new(),
            listeners: Vec::new(),
        })))
    }

    pub fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    pub fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn is_same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        match data.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    // ------------------------------------------------------------------
    // Class list
    // ------------------------------------------------------------------

    pub fn classes(&self) -> Vec<String> {
        self.attribute("class")
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    pub fn add_class(&self, class: &str) {
        let mut classes = self.classes();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
            self.write_classes(&classes);
        }
    }

    pub fn remove_class(&self, class: &str) {
        let mut classes = self.classes();
        let before = classes.len();
        classes.retain(|c| c != class);
        if classes.len() != before {
            self.write_classes(&classes);
        }
    }

    /// Flip `class`; returns whether it is present afterwards
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn write_classes(&self, classes: &[String]) {
        self.set_attribute("class", &classes.join(" "));
    }

    // ------------------------------------------------------------------
    // Tree
    // ------------------------------------------------------------------

    pub fn parent_element(&self) -> Option<Element> {
        self.0.borrow().parent.upgrade().map(Element)
    }

    /// Element children, in document order
    pub fn children(&self) -> Vec<Element> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element.clone()),
                Node::Text(_) => None,
            })
            .collect()
    }

    pub fn first_element_child(&self) -> Option<Element> {
        self.children().into_iter().next()
    }

    /// True when the element has no child nodes at all
    pub fn is_empty(&self) -> bool {
        self.0.borrow().children.is_empty()
    }

    /// Whether `other` is this element or one of its descendants
    pub fn contains(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.is_same_node(self) {
                return true;
            }
            current = node.parent_element();
        }
        false
    }

    pub fn append_text(&self, text: &str) {
        self.0.borrow_mut().children.push(Node::Text(text.to_string()));
    }

    pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
        self.adopt(child, |children| children.len())
    }

    pub fn prepend_child(&self, child: &Element) -> Result<(), DomError> {
        self.adopt(child, |_| 0)
    }

    /// Insert `node` as the previous sibling of this element
    pub fn before(&self, node: &Element) -> Result<(), DomError> {
        let parent = self.parent_element().ok_or(DomError::Detached)?;
        if node.is_same_node(self) {
            return Ok(());
        }
        let anchor = self.clone();
        parent.adopt(node, move |children| {
            position_of(children, &anchor).unwrap_or(children.len())
        })
    }

    /// Insert `node` as the next sibling of this element
    pub fn after(&self, node: &Element) -> Result<(), DomError> {
        let parent = self.parent_element().ok_or(DomError::Detached)?;
        if node.is_same_node(self) {
            return Ok(());
        }
        let anchor = self.clone();
        parent.adopt(node, move |children| {
            position_of(children, &anchor)
                .map(|index| index + 1)
                .unwrap_or(children.len())
        })
    }

    /// Put `replacement` where this element is and detach this element
    pub fn replace_with(&self, replacement: &Element) -> Result<(), DomError> {
        if replacement.is_same_node(self) {
            return Ok(());
        }
        self.before(replacement)?;
        self.remove();
        Ok(())
    }

    /// Detach from the parent, if any. The subtree stays intact.
    pub fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|node| !node.is_element(self));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    /// Append a freshly built, detached child without hierarchy checks
    pub(super) fn push_child(&self, child: Element) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(Node::Element(child));
    }

    fn adopt(
        &self,
        child: &Element,
        locate: impl FnOnce(&[Node]) -> usize,
    ) -> Result<(), DomError> {
        if child.contains(self) {
            return Err(DomError::HierarchyRequest);
        }
        child.remove();

        {
            let mut data = self.0.borrow_mut();
            let index = locate(&data.children).min(data.children.len());
            data.children.insert(index, Node::Element(child.clone()));
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First descendant matching `selector`, in document order
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self.find_descendant(&selector))
    }

    /// Every descendant matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        let selector = Selector::parse(selector)?;
        let mut found = Vec::new();
        self.collect_descendants(&selector, &mut found);
        Ok(found)
    }

    fn find_descendant(&self, selector: &Selector) -> Option<Element> {
        for child in self.children() {
            if selector.matches(&child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(selector) {
                return Some(found);
            }
        }
        None
    }

    fn collect_descendants(&self, selector: &Selector, found: &mut Vec<Element>) {
        for child in self.children() {
            if selector.matches(&child) {
                found.push(child.clone());
            }
            child.collect_descendants(selector, found);
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Register `handler` under `key`.
    ///
    /// A second registration with the same kind and key is ignored and
    /// returns `false`, so a listener can never be bound twice.
    pub fn add_event_listener<F>(&self, kind: EventKind, key: &'static str, handler: F) -> bool
    where
        F: Fn(&mut Event) + 'static,
    {
        if self.has_event_listener(kind, key) {
            return false;
        }
        self.0.borrow_mut().listeners.push(RegisteredListener {
            kind,
            key,
            handler: Rc::new(handler),
        });
        true
    }

    pub fn remove_event_listener(&self, kind: EventKind, key: &'static str) -> bool {
        let mut data = self.0.borrow_mut();
        let before = data.listeners.len();
        data.listeners.retain(|l| !(l.kind == kind && l.key == key));
        data.listeners.len() != before
    }

    pub fn has_event_listener(&self, kind: EventKind, key: &'static str) -> bool {
        self.0
            .borrow()
            .listeners
            .iter()
            .any(|l| l.kind == kind && l.key == key)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    fn listeners(&self, kind: EventKind) -> Vec<Listener> {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.handler.clone())
            .collect()
    }

    /// Run listeners on this element, then bubble through its ancestors.
    ///
    /// Returns `false` if any listener called [`Event::prevent_default`].
    pub fn dispatch_event(&self, kind: EventKind) -> bool {
        let mut event = Event::new(self.clone());
        let mut current = Some(self.clone());

        while let Some(node) = current {
            event.set_current_target(node.clone());
            for listener in node.listeners(kind) {
                listener(&mut event);
            }
            if event.propagation_stopped() {
                break;
            }
            current = node.parent_element();
        }

        !event.default_prevented()
    }

    pub fn click(&self) -> bool {
        self.dispatch_event(EventKind::Click)
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_outer_html(&mut out);
        out
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text_content(&mut out);
        out
    }

    fn write_text_content(&self, out: &mut String) {
        for child in self.0.borrow().children.iter() {
            child.write_text(out);
        }
    }

    fn write_outer_html(&self, out: &mut String) {
        let data = self.0.borrow();
        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&data.tag.as_str()) {
            return;
        }
        for child in &data.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", data.tag);
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_node(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("children", &data.children.len())
            .finish()
    }
}

fn position_of(children: &[Node], anchor: &Element) -> Option<usize> {
    children.iter().position(|node| node.is_element(anchor))
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
