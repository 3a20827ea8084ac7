//! Change notification for the presentation layer.
//!
//! Every intent that changes the table produces exactly one
//! [`ChangeNotice`], which lists the [`GameEvent`]s in the order they
//! happened. Renderers register callbacks in a [`ListenerRegistry`] and
//! re-read snapshots when notified.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use set_engine::engine::SetGameBuilder;
//!
//! let mut game = SetGameBuilder::new().seed(42).build();
//!
//! let notices = Arc::new(Mutex::new(0));
//! let sink = Arc::clone(&notices);
//! game.subscribe(move |_notice| *sink.lock().unwrap() += 1);
//!
//! game.deal_more();
//! assert_eq!(*notices.lock().unwrap(), 1);
//! ```

mod event;
mod registry;

pub use event::{ChangeNotice, GameEvent};
pub use registry::{Listener, ListenerRegistry, SubscriptionId};
