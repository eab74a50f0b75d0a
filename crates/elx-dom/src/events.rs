//! DOM Events
//!
//! Listener registration and synchronous dispatch.

use std::fmt;
use std::rc::Rc;

use crate::NodeId;

/// Shared event callback.
///
/// Cloning a listener shares the same callable, so one handler can be
/// registered on many elements.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&mut Event)>);

impl Listener {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Event) + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invoke the callback
    pub fn call(&self, event: &mut Event) {
        (self.0)(event)
    }

    /// Whether two listeners share the same callable
    pub fn ptr_eq(&self, other: &Listener) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Listener(..)")
    }
}

/// Listener registered on an element for one event type
#[derive(Debug, Clone)]
pub struct EventListener {
    pub event_type: String,
    pub listener: Listener,
}

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub target: NodeId,
    pub current_target: NodeId,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create a bubbling, cancelable event
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_ascii_lowercase(),
            target: NodeId::NONE,
            current_target: NodeId::NONE,
            bubbles: true,
            cancelable: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create an event that only reaches its target
    pub fn non_bubbling(event_type: &str) -> Self {
        Self {
            bubbles: false,
            ..Self::new(event_type)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_listener_call() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let listener = Listener::new(move |_| counter.set(counter.get() + 1));

        let mut event = Event::new("click");
        listener.call(&mut event);
        listener.clone().call(&mut event);

        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_event_type_lowercased() {
        let event = Event::new("DblClick");
        assert_eq!(event.event_type, "dblclick");
        assert!(event.bubbles);
    }

    #[test]
    fn test_prevent_default_requires_cancelable() {
        let mut event = Event::new("submit");
        event.prevent_default();
        assert!(event.is_default_prevented());

        let mut event = Event::new("load");
        event.cancelable = false;
        event.prevent_default();
        assert!(!event.is_default_prevented());
    }
}
