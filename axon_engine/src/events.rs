//! Structured events published onto a network's [`EventBroker`](crate::event_broker::EventBroker)
//! as nodes live their lives. These are the crate's only logging surface
//! beyond the `log` facade: anything a human or a test wants to observe
//! about *why* a node did something subscribes to the relevant event type
//! instead of scraping log lines.

use crate::ids::NodeId;

/// Published once, right after a node actor's mailbox loop starts.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpawned {
    pub id: NodeId,
}

/// Published right before a node's mailbox loop returns, whether from
/// `Die` or from its channel closing.
#[derive(Debug, Clone, Copy)]
pub struct NodeDied {
    pub id: NodeId,
}

/// Published whenever a neuron's barrier is satisfied and it activates.
#[derive(Debug, Clone, Copy)]
pub struct NeuronFired {
    pub id: NodeId,
    pub output: f64,
}

/// Published whenever an actuator fires its output hook.
#[derive(Debug, Clone, Copy)]
pub struct ActuatorFired {
    pub id: NodeId,
    pub value: f64,
}

/// Published for each zero-valued synapse sent by `SendRecurrentSignals`.
#[derive(Debug, Clone, Copy)]
pub struct RecurrentSignalSent {
    pub from: NodeId,
    pub to: NodeId,
}
