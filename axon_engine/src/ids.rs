//! Opaque identifiers used throughout the engine.
//!
//! Both id kinds are backed by a v4 [`Uuid`](uuid::Uuid) so that they are
//! unique without any coordination between the nodes that mint them, and so
//! that they round-trip losslessly through `serde`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies a single node (sensor, neuron, or actuator) for the life of a
/// network. Exactly one actor exists per [`NodeId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Mints a fresh, globally unique node id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Identifies a single connection (an edge carrying synapses from one
/// node's outbound list to another's inbound list), unique across the
/// network. Minted once at wiring time and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeuronConnectionId(Uuid);

impl NeuronConnectionId {
    /// Mints a fresh, globally unique connection id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NeuronConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NeuronConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        assert_ne!(NodeId::new(), NodeId::new());
    }

    #[test]
    fn connection_ids_are_unique() {
        assert_ne!(NeuronConnectionId::new(), NeuronConnectionId::new());
    }

    #[test]
    fn node_id_round_trips_through_json() {
        let id = NodeId::new();
        let json = serde_json::to_string(&id).unwrap();
        let restored: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
