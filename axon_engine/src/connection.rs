//! Connection records as seen from either end of a wire.
//!
//! A connection is minted once, at wiring time, and from then on is known
//! to both endpoints by the same [`NeuronConnectionId`]. `InitialWeight` is
//! immutable for the life of the connection; `Weight` is the live value
//! mutated by learning and reset to `InitialWeight` by `ResetNeuron`.

use crate::ids::{NeuronConnectionId, NodeId};
use crate::node::handle::NodeHandle;
use serde::{Deserialize, Serialize};

/// Position of a connection within a sensor's (or, degenerately, any
/// node's) outbound list. Sensor fan-out connections carry a stable
/// ordinal starting at 0; all other outbound connections carry 0, which
/// is unused since non-sensor nodes do not zip a vector against their
/// outbound list.
pub type ConnectionOrder = u32;

/// An inbound connection as stored on the receiving node: who it comes
/// from, its position among the node's inbound connections (which fixes
/// the iteration order used when summing weighted synapses), its
/// immutable initial weight, and its live, possibly-learned weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundConnection {
    pub id: NeuronConnectionId,
    pub order: ConnectionOrder,
    pub from: NodeId,
    pub initial_weight: f64,
    pub weight: f64,
}

impl InboundConnection {
    /// Creates a fresh inbound connection with `weight == initial_weight`.
    pub fn new(id: NeuronConnectionId, order: ConnectionOrder, from: NodeId, weight: f64) -> Self {
        Self {
            id,
            order,
            from,
            initial_weight: weight,
            weight,
        }
    }

    /// Resets the live weight back to its initial value, as performed by
    /// `ResetNeuron`.
    pub fn reset_weight(&mut self) {
        self.weight = self.initial_weight;
    }
}

/// An outbound connection as stored on the sending node: the target it
/// posts synapses to, its position (meaningful only for sensors), and the
/// weight it was wired with (outbound connections do not mutate their own
/// weight; the *target's* inbound copy is what learning updates).
///
/// Unlike [`InboundConnection`] this is pure live state and is never
/// persisted on a [`crate::record::NodeRecord`] — it carries a live
/// [`NodeHandle`] so the owning actor can post directly to its target
/// without an extra address lookup.
#[derive(Debug, Clone)]
pub struct OutboundConnection {
    pub id: NeuronConnectionId,
    pub order: ConnectionOrder,
    pub initial_weight: f64,
    pub target: NodeId,
    pub target_handle: NodeHandle,
}

impl OutboundConnection {
    pub fn new(
        id: NeuronConnectionId,
        order: ConnectionOrder,
        weight: f64,
        target_handle: NodeHandle,
    ) -> Self {
        Self {
            id,
            order,
            initial_weight: weight,
            target: target_handle.id(),
            target_handle,
        }
    }
}

/// The persisted shape of an inbound connection, as embedded in a
/// [`NodeRecord`](crate::record::NodeRecord). Unlike [`InboundConnection`]
/// it carries only the data needed to rebuild the live form: the current
/// weight is folded back into `Weight` at rehydration time, and
/// `InitialWeight` is restored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InactiveConnection {
    pub source: NodeId,
    pub weight: f64,
    pub order: ConnectionOrder,
}

impl From<&InboundConnection> for InactiveConnection {
    fn from(live: &InboundConnection) -> Self {
        Self {
            source: live.from,
            weight: live.weight,
            order: live.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_weight_restores_initial_value() {
        let mut conn = InboundConnection::new(
            NeuronConnectionId::new(),
            0,
            NodeId::new(),
            1.0,
        );
        conn.weight = 1.4;
        conn.reset_weight();
        assert_eq!(conn.weight, 1.0);
    }

    #[test]
    fn inactive_connection_snapshots_live_weight_not_initial() {
        let mut conn = InboundConnection::new(
            NeuronConnectionId::new(),
            0,
            NodeId::new(),
            1.0,
        );
        conn.weight = 1.4;
        let inactive = InactiveConnection::from(&conn);
        assert_eq!(inactive.weight, 1.4);
        assert_eq!(inactive.order, 0);
    }
}
