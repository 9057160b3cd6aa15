//! # axon_engine
//!
//! A message-passing neural network runtime: every node (sensor, neuron,
//! or actuator) is an independently scheduled actor that communicates
//! with its neighbors purely through asynchronous messages over its own
//! mailbox. There is no shared mutable graph structure — a node only ever
//! touches its own state and the handles it holds to the nodes it is
//! wired to.
//!
//! ## Architecture
//!
//! - **node**: the actor itself — mailbox message set, the state machine
//!   that processes it, and the handle other code addresses it by.
//! - **wiring**: the only supported way to connect two live nodes.
//! - **coordinator**: operations over a whole population of node handles —
//!   waiting for quiescence, broadcasting a sync tick, broadcasting
//!   actuator activation, tearing the network down.
//! - **builder**: spawning fresh nodes and rehydrating a node's inbound
//!   state from a previously captured [`record::NodeRecord`].
//! - **event_broker**: a generalized publish/subscribe bus. Every
//!   network built from this crate shares one [`EventBroker`] instance
//!   across its nodes; it doubles as this crate's trace/log sink (see
//!   [`events`]) and as a general integration point for anything else a
//!   caller wants to observe.
//!
//! ## Example
//!
//! ```
//! use axon_engine::builder::NetworkBuilder;
//! use axon_engine::config::NodeTimings;
//! use axon_engine::hooks::{FnOutputHook, FnSyncFunction};
//! use axon_engine::learning::LearningAlgorithm;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let builder = NetworkBuilder::new(NodeTimings::default());
//! let sensor = builder.spawn_sensor(0, Arc::new(FnSyncFunction::new(|| vec![1.0])), None);
//! let neuron = builder.spawn_neuron(1, Some(0.0), Some("identity".to_string()), LearningAlgorithm::NoLearning);
//! let actuator = builder.spawn_actuator(2, Arc::new(FnOutputHook::new(|v: f64| println!("{v}"))), None);
//!
//! sensor.add_outbound_connection(neuron.clone(), 1.0, 0).await.unwrap();
//! neuron.add_outbound_connection(actuator.clone(), 1.0, 0).await.unwrap();
//! sensor.sync().await.unwrap();
//! # }
//! ```

pub mod activation;
pub mod barrier;
pub mod builder;
pub mod config;
pub mod connection;
pub mod coordinator;
pub mod error;
pub mod event_broker;
pub mod events;
pub mod hooks;
pub mod ids;
pub mod learning;
pub mod node;
pub mod record;
pub mod wiring;

pub use error::{EngineError, Result};
pub use event_broker::EventBroker;
pub use ids::{NeuronConnectionId, NodeId};

/// Re-exports of the names most call sites need, mirroring the crate's
/// own usage in its doctests and integration tests.
pub mod prelude {
    pub use crate::activation::{self, ActivationFunctionId};
    pub use crate::builder::NetworkBuilder;
    pub use crate::config::{CoordinatorConfig, NodeTimings};
    pub use crate::coordinator::NetworkCoordinator;
    pub use crate::error::{EngineError, Result};
    pub use crate::event_broker::EventBroker;
    pub use crate::hooks::{FnOutputHook, FnSyncFunction, OutputHook, SyncFunction};
    pub use crate::ids::{NeuronConnectionId, NodeId};
    pub use crate::learning::LearningAlgorithm;
    pub use crate::node::{ActivationOption, NodeHandle, NodeStatus};
    pub use crate::record::{NodeRecord, NodeType};
    pub use crate::wiring;
}
