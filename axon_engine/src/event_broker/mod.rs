//! # Event broker
//!
//! A small, type-safe publish/subscribe bus used as the side-band trace
//! mechanism described by the engine's info log sink: node actors publish
//! lifecycle and error events here instead of writing to a fixed
//! destination, and the default log sink is just one subscriber among
//! possibly several (metrics exporters, test harnesses, ...).
//!
//! ## Example
//!
//! ```
//! use axon_engine::EventBroker;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct NodeFired { id: u64 }
//!
//! let broker = EventBroker::new();
//! broker.subscribe(|event: Arc<NodeFired>| {
//!     println!("node {} fired", event.id);
//! });
//! broker.publish(NodeFired { id: 42 });
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Callback invoked with a type-erased event, downcast to the concrete type
/// at dispatch time. Must be thread-safe since publish and subscribe may be
/// called from any actor task.
type SubscriberFn = Box<dyn Fn(Arc<dyn Any + Send + Sync>) + Send + Sync>;

/// Central pub/sub mechanism decoupling event producers from consumers.
///
/// Reads (publish) take a shared lock; writes (subscribe/clear) take an
/// exclusive one, so publishing from many node actors concurrently never
/// blocks on other publishers.
#[derive(Default)]
pub struct EventBroker {
    subscribers: RwLock<HashMap<TypeId, Vec<SubscriberFn>>>,
}

impl EventBroker {
    /// Creates an empty broker with no registered subscribers.
    pub fn new() -> Self {
        EventBroker {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `callback` to run whenever an event of type `T` is published.
    pub fn subscribe<T, F>(&self, callback: F)
    where
        T: 'static + Any + Send + Sync,
        F: Fn(Arc<T>) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();

        let callback_wrapper = Box::new(move |event: Arc<dyn Any + Send + Sync>| {
            if let Ok(event) = event.downcast::<T>() {
                callback(event);
            }
        });

        let mut subscribers = self.subscribers.write().unwrap();
        subscribers
            .entry(type_id)
            .or_default()
            .push(callback_wrapper);
    }

    /// Publishes `event` to every subscriber registered for its type.
    pub fn publish<T>(&self, event: T)
    where
        T: 'static + Any + Send + Sync,
    {
        let event = Arc::new(event);
        let type_id = (*event).type_id();

        let subscribers = self.subscribers.read().unwrap();
        if let Some(callbacks) = subscribers.get(&type_id) {
            let event = event as Arc<dyn Any + Send + Sync>;
            for callback in callbacks {
                callback(Arc::clone(&event));
            }
        }
    }

    /// Removes every subscriber registered for event type `T`.
    pub fn clear_subscribers<T>(&self)
    where
        T: 'static + Any + Send + Sync,
    {
        let type_id = TypeId::of::<T>();
        let mut subscribers = self.subscribers.write().unwrap();
        subscribers.remove(&type_id);
    }

    /// Number of subscribers currently registered for event type `T`.
    pub fn subscriber_count<T>(&self) -> usize
    where
        T: 'static + Any + Send + Sync,
    {
        let type_id = TypeId::of::<T>();
        let subscribers = self.subscribers.read().unwrap();
        subscribers
            .get(&type_id)
            .map_or(0, |callbacks| callbacks.len())
    }
}
