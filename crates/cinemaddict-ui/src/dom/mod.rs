//! Scoped, single-threaded retained DOM
//!
//! Views materialize their markup into this tree, query it by selector,
//! flip class lists on it and dispatch click events through it. Every
//! subtree is owned by whoever holds its root [`Element`]; there is no
//! global document.
//!
//! ```ignore
//! let root = create_element(r#"<div class="box"><button class="ok">ok</button></div>"#)?;
//! let button = root.query_selector(".ok")?.unwrap();
//! button.add_event_listener(EventKind::Click, "ok", |event| event.prevent_default());
//! assert!(!button.click());
//! ```

mod event;
mod node;
mod parse;
mod selector;

pub use event::{Event, EventKind};
pub use node::{Element, Node, WeakElement};
pub use parse::create_element;
pub use selector::Selector;
