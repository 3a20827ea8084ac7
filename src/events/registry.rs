//! Subscriber registry for change notices.
//!
//! Renderers subscribe a callback and re-read the table whenever it fires.
//! Callbacks must be `Send` so an engine can live behind a `Mutex`.

use serde::{Deserialize, Serialize};

use super::event::ChangeNotice;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// A change notice callback.
pub type Listener = Box<dyn FnMut(&ChangeNotice) + Send>;

/// Registered listeners, notified in subscription order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeNotice) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener.
    ///
    /// Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Deliver a notice to every listener.
    pub fn notify(&mut self, notice: &ChangeNotice) {
        for (_, listener) in &mut self.listeners {
            listener(notice);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if there are no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.listeners.iter().map(|(id, _)| id.0).collect();
        f.debug_struct("ListenerRegistry")
            .field("listeners", &ids)
            .field("next_id", &self.next_id)
            .finish()
    }
}
