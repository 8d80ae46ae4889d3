//! Base view abstraction
//!
//! A view turns its current data into markup through [`View::template`] and
//! lazily materializes that markup into a retained DOM subtree the first
//! time [`View::element`] is called. The subtree is cached in the view's
//! [`ViewBase`] until [`View::remove_element`] drops it.
//!
//! Callbacks registered by a view's owner live in a [`CallbackRegistry`]
//! keyed by the view's interaction type. DOM listeners hold a clone of the
//! registry and look the callback up at dispatch time, so replacing a
//! callback never requires rebinding the listener.

use std::any::type_name;
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use tracing::debug;

use crate::dom::{create_element, Element};
use crate::error::{ViewError, ViewResult};

/// Zero-argument callback supplied by a view's owner
pub type Callback = Rc<dyn Fn() -> anyhow::Result<()>>;

/// Interaction name to callback mapping shared with DOM listeners
pub struct CallbackRegistry<K> {
    handlers: Rc<RefCell<HashMap<K, Callback>>>,
}

impl<K> Clone for CallbackRegistry<K> {
    fn clone(&self) -> Self {
        Self {
            handlers: Rc::clone(&self.handlers),
        }
    }
}

impl<K> Default for CallbackRegistry<K> {
    fn default() -> Self {
        Self {
            handlers: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl<K: Eq + Hash> CallbackRegistry<K> {
    /// Store `callback` for `key`, replacing any previous one.
    /// Returns whether a callback was replaced.
    pub(crate) fn set<F>(&self, key: K, callback: F) -> bool
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.handlers
            .borrow_mut()
            .insert(key, Rc::new(callback))
            .is_some()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.handlers.borrow().contains_key(key)
    }

    /// Run the callback for `key`, or `None` if nothing is registered.
    ///
    /// The registry is not borrowed while the callback runs, so a callback
    /// may register callbacks itself.
    pub(crate) fn invoke(&self, key: &K) -> Option<anyhow::Result<()>> {
        let callback = self.handlers.borrow().get(key).cloned();
        callback.map(|callback| callback())
    }
}

/// State every view carries: the cached root element and its callbacks
pub struct ViewBase<K = ()> {
    element: RefCell<Option<Element>>,
    callbacks: CallbackRegistry<K>,
}

impl<K> Default for ViewBase<K> {
    fn default() -> Self {
        Self {
            element: RefCell::new(None),
            callbacks: CallbackRegistry::default(),
        }
    }
}

impl<K> ViewBase<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached root element, without materializing it
    pub fn cached_element(&self) -> Option<Element> {
        self.element.borrow().clone()
    }

    pub fn has_element(&self) -> bool {
        self.element.borrow().is_some()
    }

    /// Only concrete views in this crate may register callbacks
    pub(crate) fn callbacks(&self) -> &CallbackRegistry<K> {
        &self.callbacks
    }

    fn store(&self, element: Element) {
        *self.element.borrow_mut() = Some(element);
    }

    fn clear(&self) -> Option<Element> {
        self.element.borrow_mut().take()
    }
}

/// A renderable component.
///
/// Implementors supply [`View::template`]; the provided methods handle
/// element construction and caching.
pub trait View {
    /// Key type of the view's callback registry; `()` for views without
    /// interactions
    type Interaction;

    fn base(&self) -> &ViewBase<Self::Interaction>;

    /// Markup for the view's current data
    fn template(&self) -> String;

    /// Root element, built from [`View::template`] on first access.
    ///
    /// Repeated calls return the identical node until
    /// [`View::remove_element`] is called.
    fn element(&self) -> ViewResult<Element> {
        if let Some(element) = self.base().cached_element() {
            return Ok(element);
        }

        let element = create_element(&self.template())?;
        debug!(view = type_name::<Self>(), tag = %element.tag_name(), "materialized view element");
        self.base().store(element.clone());
        Ok(element)
    }

    /// Drop the cached element so the next [`View::element`] rebuilds it.
    ///
    /// The old subtree is not detached and listeners bound on it (including
    /// those of mounted child views) stay alive as long as something else
    /// holds the subtree.
    fn remove_element(&self) {
        if self.base().clear().is_some() {
            debug!(view = type_name::<Self>(), "dropped view element");
        }
    }

    /// Element inside this view's subtree matching `selector`, or
    /// [`ViewError::MissingElement`]
    fn require(&self, selector: &str) -> ViewResult<Element> {
        self.element()?
            .query_selector(selector)?
            .ok_or_else(|| ViewError::MissingElement(selector.to_string()))
    }
}
