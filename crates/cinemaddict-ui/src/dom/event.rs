//! Events dispatched through the retained DOM

use std::rc::Rc;

use super::node::Element;

/// Kind of event a listener subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

pub(crate) type Listener = Rc<dyn Fn(&mut Event)>;

/// An event travelling from its target up through the target's ancestors
#[derive(Debug)]
pub struct Event {
    target: Element,
    current_target: Element,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub(crate) fn new(target: Element) -> Self {
        Self {
            current_target: target.clone(),
            target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Element the event was dispatched on
    pub fn target(&self) -> &Element {
        &self.target
    }

    /// Element whose listener is currently running
    pub fn current_target(&self) -> &Element {
        &self.current_target
    }

    pub(crate) fn set_current_target(&mut self, element: Element) {
        self.current_target = element;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop bubbling once listeners on the current element have run
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
