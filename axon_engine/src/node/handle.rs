//! A cheap, cloneable reference to a running node actor.
//!
//! `NodeHandle` is what wiring code, the coordinator, and other nodes'
//! outbound connections actually hold — never the actor itself. Sending a
//! message that expects a reply is a two-step dance (send, then await the
//! oneshot) rather than a single call, so that a dead or unresponsive actor
//! surfaces as an [`EngineError`] instead of hanging the caller forever.

use crate::config::NodeTimings;
use crate::connection::ConnectionOrder;
use crate::error::{EngineError, Result};
use crate::ids::{NeuronConnectionId, NodeId};
use crate::node::message::{ActivationOption, NodeMessage, NodeStatus};
use crate::record::NodeRecord;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;

/// A clonable handle to a node actor's mailbox.
#[derive(Debug, Clone)]
pub struct NodeHandle {
    id: NodeId,
    sender: mpsc::Sender<NodeMessage>,
    timings: NodeTimings,
}

impl NodeHandle {
    pub(crate) fn new(id: NodeId, sender: mpsc::Sender<NodeMessage>, timings: NodeTimings) -> Self {
        Self {
            id,
            sender,
            timings,
        }
    }

    /// The id of the node this handle addresses. Cheap; does not round-trip
    /// through the actor.
    pub fn id(&self) -> NodeId {
        self.id
    }

    async fn send(&self, message: NodeMessage) -> Result<()> {
        self.sender
            .send(message)
            .await
            .map_err(|_| EngineError::MailboxClosed(self.id))
    }

    async fn await_reply<T>(&self, reply: oneshot::Receiver<T>) -> Result<T> {
        match timeout(self.timings.status_reply_budget, reply).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => Err(EngineError::ReplyDropped(self.id)),
            Err(_) => Err(EngineError::NeuronInstanceUnavailable(self.id)),
        }
    }

    /// Tell a sensor to pull from its sync function and fan out. A no-op on
    /// neurons and actuators, but still a valid message to send them.
    pub async fn sync(&self) -> Result<()> {
        self.send(NodeMessage::Sync).await
    }

    /// Deliver a synapse on `connection_id`.
    pub async fn receive_input(
        &self,
        connection_id: NeuronConnectionId,
        value: f64,
        option: ActivationOption,
    ) -> Result<()> {
        self.send(NodeMessage::ReceiveInput {
            connection_id,
            value,
            option,
        })
        .await
    }

    /// Wire `self -> target`, returning the new connection's id once the
    /// target has acknowledged its inbound half.
    pub async fn add_outbound_connection(
        &self,
        target: NodeHandle,
        weight: f64,
        order: ConnectionOrder,
    ) -> Result<NeuronConnectionId> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::AddOutboundConnection {
            target,
            weight,
            order,
            reply,
        })
        .await?;
        self.await_reply(rx).await
    }

    /// Register an inbound connection pushed by a peer. Called by wiring
    /// code, never by a node on itself.
    pub async fn add_inbound_connection(
        &self,
        connection_id: NeuronConnectionId,
        from: NodeHandle,
        weight: f64,
        order: ConnectionOrder,
    ) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::AddInboundConnection {
            connection_id,
            from,
            weight,
            order,
            reply,
        })
        .await?;
        self.await_reply(rx).await
    }

    /// Snapshot the node's current state.
    pub async fn get_node_record(&self) -> Result<NodeRecord> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::GetNodeRecord { reply }).await?;
        self.await_reply(rx).await
    }

    /// Ask the actor to exit its mailbox loop.
    pub async fn die(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::Die { reply }).await?;
        self.await_reply(rx).await
    }

    /// Actuator-only: move gating from `None` to `Some(false)`.
    pub async fn register_cortex(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::RegisterCortex { reply }).await?;
        self.await_reply(rx).await
    }

    /// Actuator-only: fire if gating is `Some(true)`.
    pub async fn activate_actuator(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::ActivateActuator { reply }).await?;
        self.await_reply(rx).await
    }

    /// Probe readiness.
    pub async fn get_node_status(&self, check_actuators: bool) -> Result<NodeStatus> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::GetNodeStatus {
            check_actuators,
            reply,
        })
        .await?;
        self.await_reply(rx).await
    }

    /// Reset inbound weights and clear both barriers.
    pub async fn reset_neuron(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::ResetNeuron { reply }).await?;
        self.await_reply(rx).await
    }

    /// Post a zero-valued synapse on every recurrent outbound connection.
    pub async fn send_recurrent_signals(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(NodeMessage::SendRecurrentSignals { reply })
            .await?;
        self.await_reply(rx).await
    }
}
