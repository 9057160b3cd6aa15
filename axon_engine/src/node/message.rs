//! The node actor's mailbox message set.
//!
//! Every message that expects a reply carries a `oneshot::Sender` for it;
//! the actor answers from inside its own message loop (or, for
//! `GetNodeRecord`, from a short-lived child task) rather than blocking on
//! anything else. See [`crate::node::actor`] for how each variant is
//! handled.

use crate::connection::ConnectionOrder;
use crate::ids::NeuronConnectionId;
use crate::node::handle::NodeHandle;
use crate::record::NodeRecord;
use tokio::sync::oneshot;

/// Carried on every `ReceiveInput`; decides whether the new synapse can
/// trigger activation even though other rules (barrier satisfaction) are
/// always checked too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOption {
    /// Fire if, after this input, the barrier is satisfied.
    ActivateIfBarrierIsFull,
    /// Fire if the node has exactly one inbound connection (regardless of
    /// whether more connections exist conceptually) — used only for
    /// recurrent bootstrap priming.
    ActivateIfNeuronHasOneConnection,
    /// Never fire as a result of this input.
    DoNotActivate,
}

/// Reply to `GetNodeStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Ready,
    Busy,
}

/// The node actor's full mailbox message set.
pub enum NodeMessage {
    /// Sensor-only: pull from the sync function and fan out. No-op on
    /// neurons and actuators.
    Sync,

    /// Deliver a synapse on a specific connection.
    ReceiveInput {
        connection_id: NeuronConnectionId,
        value: f64,
        option: ActivationOption,
    },

    /// Wire `self` -> `target` with `weight` at fan-out position `order`.
    /// Replies with the freshly minted connection id once the target has
    /// acknowledged its `AddInboundConnection`.
    AddOutboundConnection {
        target: NodeHandle,
        weight: f64,
        order: ConnectionOrder,
        reply: oneshot::Sender<NeuronConnectionId>,
    },

    /// Register an inbound connection pushed by a peer's
    /// `AddOutboundConnection` handling.
    AddInboundConnection {
        connection_id: NeuronConnectionId,
        from: NodeHandle,
        weight: f64,
        order: ConnectionOrder,
        reply: oneshot::Sender<()>,
    },

    /// Snapshot current state into a `NodeRecord`.
    GetNodeRecord { reply: oneshot::Sender<NodeRecord> },

    /// Reply, then exit the actor loop.
    Die { reply: oneshot::Sender<()> },

    /// Actuator-only: transition gating from `None` to `Some(false)`.
    RegisterCortex { reply: oneshot::Sender<()> },

    /// Actuator-only, and only while gating is `Some(true)`: fire the
    /// output hook with the current barrier.
    ActivateActuator { reply: oneshot::Sender<()> },

    /// Report readiness. See `NodeActor::is_ready` for the predicate.
    GetNodeStatus {
        check_actuators: bool,
        reply: oneshot::Sender<NodeStatus>,
    },

    /// Reset inbound weights to their initial values and clear both
    /// barriers, draining any messages already queued.
    ResetNeuron { reply: oneshot::Sender<()> },

    /// Post a zero-valued synapse on every recurrent outbound connection,
    /// to seed feedback loops that would otherwise never see a full
    /// barrier.
    SendRecurrentSignals { reply: oneshot::Sender<()> },
}
