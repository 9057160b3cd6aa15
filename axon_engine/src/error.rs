//! Unified error taxonomy for the engine.
//!
//! Every fallible public operation returns [`Result<T, EngineError>`]; the
//! core never panics on bad input, reserving `.unwrap()`/`.expect()` for
//! invariants whose violation would mean a bug in this crate rather than a
//! caller mistake (see the `NodeHandle` reply-channel comments).

use crate::ids::NodeId;
use thiserror::Error;

/// Errors raised by node actors and the coordination layer built on top of
/// them.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A status or command reply did not arrive within its timeout budget
    /// (~500ms for a status probe). The node is treated as unavailable;
    /// the caller's operation is aborted.
    #[error("node {0} did not respond within its timeout budget")]
    NeuronInstanceUnavailable(NodeId),

    /// `Sync` was delivered to a sensor with zero outbound connections.
    #[error("sensor {0} has no outbound connections to sync to")]
    SensorHasNoOutboundConnections(NodeId),

    /// A neuron fired on a satisfied barrier but one of its inbound
    /// connection ids had no corresponding synapse. This is a structural
    /// bug: the barrier was reported satisfied yet a lookup missed.
    #[error("neuron {0} fired with a missing inbound connection in its barrier")]
    MissingInboundConnection(NodeId),

    /// `ReceiveInput` was delivered to a sensor. Sensors only ever
    /// originate synapses via `Sync`; receiving one is a structural bug
    /// in the caller's wiring.
    #[error("sensor {0} received an input synapse, which sensors never accept")]
    SensorReceivedInput(NodeId),

    /// The mailbox for a node could not be reached because the actor task
    /// has already exited (its receiver was dropped). This happens when a
    /// caller holds a stale handle after `Die`.
    #[error("node {0} mailbox is closed")]
    MailboxClosed(NodeId),

    /// A reply channel was dropped before the actor answered, which can
    /// only happen if the actor task itself panicked.
    #[error("node {0} dropped its reply channel before answering")]
    ReplyDropped(NodeId),

    /// A persisted `NodeRecord` could not be re-hydrated into a live
    /// actor because it referenced data inconsistent with its own shape
    /// (e.g. a `Sensor` record whose `NodeType` fan-out disagrees with its
    /// inbound-connection invariants).
    #[error("node record for {0} is malformed: {1}")]
    MalformedRecord(NodeId, String),
}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_node() {
        let id = NodeId::new();
        let err = EngineError::SensorHasNoOutboundConnections(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
