//! The node actor: a single task owning one node's state, processing its
//! mailbox one message at a time. Sensor, neuron, and actuator behavior
//! differ only in [`NodeKind`]; the mailbox loop, wiring handshake, and
//! status protocol are shared.

use crate::activation::{resolve, ActivationFn, ActivationFunctionId};
use crate::barrier::Barrier;
use crate::config::NodeTimings;
use crate::connection::{ConnectionOrder, InactiveConnection, InboundConnection, OutboundConnection};
use crate::error::EngineError;
use crate::event_broker::EventBroker;
use crate::events::{ActuatorFired, NeuronFired, NodeDied, NodeSpawned, RecurrentSignalSent};
use crate::hooks::{OutputHook, SyncFunction};
use crate::ids::{NeuronConnectionId, NodeId};
use crate::learning::LearningAlgorithm;
use crate::node::handle::NodeHandle;
use crate::node::message::{ActivationOption, NodeMessage, NodeStatus};
use crate::record::{NodeRecord, NodeType};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;

/// Mailbox capacity for a single node. Generous enough that a sensor's
/// burst fan-out never backpressures against a slow downstream neuron.
const MAILBOX_CAPACITY: usize = 1024;

/// The behavior and private state that distinguishes the three node
/// kinds. Shared bookkeeping (id, layer, connections, barriers) lives
/// directly on [`NodeActor`].
enum NodeKind {
    Sensor {
        sync_function: Arc<dyn SyncFunction>,
        sync_function_id: Option<String>,
        maximum_vector_length: usize,
    },
    Neuron {
        bias: Option<f64>,
        activation_fn: ActivationFn,
        activation_function_id: Option<ActivationFunctionId>,
    },
    Actuator {
        output_hook: Arc<dyn OutputHook>,
        output_hook_id: Option<String>,
        /// `None`: no cortex attached, fires as soon as its barrier is
        /// satisfied. `Some(false)`: a cortex is attached but has not
        /// granted this firing. `Some(true)`: the cortex has granted one
        /// firing, consumed the moment the barrier is next satisfied.
        gating: Option<bool>,
    },
}

/// A single node's actor state and mailbox.
pub struct NodeActor {
    id: NodeId,
    layer: i64,
    kind: NodeKind,
    self_handle: NodeHandle,
    inbound: HashMap<NeuronConnectionId, InboundConnection>,
    outbound: Vec<OutboundConnection>,
    /// Ids of outbound connections classified as recurrent at wiring time:
    /// the target is a neuron, `self` is a neuron, and `self.layer >=
    /// target.layer`.
    recurrent_outbound: HashSet<NeuronConnectionId>,
    barrier: Barrier,
    /// Synapses that arrive on a connection id already present in
    /// `barrier`, before the barrier has fired. Promoted into `barrier`
    /// the moment the node fires.
    overflow_barrier: Barrier,
    learning_algorithm: LearningAlgorithm,
    timings: NodeTimings,
    events: Arc<EventBroker>,
    mailbox: mpsc::Receiver<NodeMessage>,
}

impl NodeActor {
    fn spawn(
        id: NodeId,
        layer: i64,
        kind: NodeKind,
        learning_algorithm: LearningAlgorithm,
        timings: NodeTimings,
        events: Arc<EventBroker>,
    ) -> NodeHandle {
        let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
        let self_handle = NodeHandle::new(id, tx, timings);
        let actor = NodeActor {
            id,
            layer,
            kind,
            self_handle: self_handle.clone(),
            inbound: HashMap::new(),
            outbound: Vec::new(),
            recurrent_outbound: HashSet::new(),
            barrier: Barrier::new(),
            overflow_barrier: Barrier::new(),
            learning_algorithm,
            timings,
            events,
            mailbox: rx,
        };
        tokio::spawn(actor.run());
        self_handle
    }

    /// Spawns a sensor actor and returns a handle to it. A sensor has no
    /// fixed fan-out at construction time — it is simply however many
    /// outbound connections the sensor ends up wired with, reported live
    /// by `GetNodeRecord` and used to size each `Sync`'s pull.
    pub fn spawn_sensor(
        id: NodeId,
        layer: i64,
        sync_function: Arc<dyn SyncFunction>,
        sync_function_id: Option<String>,
        timings: NodeTimings,
        events: Arc<EventBroker>,
    ) -> NodeHandle {
        Self::spawn(
            id,
            layer,
            NodeKind::Sensor {
                sync_function,
                sync_function_id,
                maximum_vector_length: 0,
            },
            LearningAlgorithm::NoLearning,
            timings,
            events,
        )
    }

    /// Spawns a neuron actor and returns a handle to it.
    pub fn spawn_neuron(
        id: NodeId,
        layer: i64,
        bias: Option<f64>,
        activation_function_id: Option<ActivationFunctionId>,
        learning_algorithm: LearningAlgorithm,
        timings: NodeTimings,
    ) -> NodeHandle {
        let activation_fn = resolve(activation_function_id.as_deref());
        Self::spawn(
            id,
            layer,
            NodeKind::Neuron {
                bias,
                activation_fn,
                activation_function_id,
            },
            learning_algorithm,
            timings,
            Arc::new(EventBroker::new()),
        )
    }

    /// Spawns a neuron actor sharing an existing network's event broker.
    pub fn spawn_neuron_with_events(
        id: NodeId,
        layer: i64,
        bias: Option<f64>,
        activation_function_id: Option<ActivationFunctionId>,
        learning_algorithm: LearningAlgorithm,
        timings: NodeTimings,
        events: Arc<EventBroker>,
    ) -> NodeHandle {
        let activation_fn = resolve(activation_function_id.as_deref());
        Self::spawn(
            id,
            layer,
            NodeKind::Neuron {
                bias,
                activation_fn,
                activation_function_id,
            },
            learning_algorithm,
            timings,
            events,
        )
    }

    /// Spawns an actuator actor and returns a handle to it.
    pub fn spawn_actuator(
        id: NodeId,
        layer: i64,
        output_hook: Arc<dyn OutputHook>,
        output_hook_id: Option<String>,
        timings: NodeTimings,
        events: Arc<EventBroker>,
    ) -> NodeHandle {
        Self::spawn(
            id,
            layer,
            NodeKind::Actuator {
                output_hook,
                output_hook_id,
                gating: None,
            },
            LearningAlgorithm::NoLearning,
            timings,
            events,
        )
    }

    async fn run(mut self) {
        self.events.publish(NodeSpawned { id: self.id });
        loop {
            match timeout(self.timings.mailbox_poll_timeout, self.mailbox.recv()).await {
                Ok(Some(message)) => {
                    if self.handle(message).await {
                        break;
                    }
                }
                Ok(None) => break,
                Err(_) => continue,
            }
        }
        self.events.publish(NodeDied { id: self.id });
    }

    /// Dispatches one message. Returns `true` if the actor should exit its
    /// loop after this message.
    async fn handle(&mut self, message: NodeMessage) -> bool {
        match message {
            NodeMessage::Sync => {
                self.handle_sync().await;
            }
            NodeMessage::ReceiveInput {
                connection_id,
                value,
                option,
            } => {
                if self.handle_receive_input(connection_id, value, option).await {
                    return true;
                }
            }
            NodeMessage::AddOutboundConnection {
                target,
                weight,
                order,
                reply,
            } => {
                self.handle_add_outbound_connection(target, weight, order, reply)
                    .await;
            }
            NodeMessage::AddInboundConnection {
                connection_id,
                from,
                weight,
                order,
                reply,
            } => {
                self.handle_add_inbound_connection(connection_id, from, weight, order, reply);
            }
            NodeMessage::GetNodeRecord { reply } => {
                let _ = reply.send(self.to_record());
            }
            NodeMessage::Die { reply } => {
                let _ = reply.send(());
                return true;
            }
            NodeMessage::RegisterCortex { reply } => {
                self.handle_register_cortex(reply);
            }
            NodeMessage::ActivateActuator { reply } => {
                self.handle_activate_actuator(reply).await;
            }
            NodeMessage::GetNodeStatus {
                check_actuators,
                reply,
            } => {
                let status = if self.is_ready(check_actuators) {
                    NodeStatus::Ready
                } else {
                    NodeStatus::Busy
                };
                let _ = reply.send(status);
            }
            NodeMessage::ResetNeuron { reply } => {
                self.handle_reset_neuron().await;
                let _ = reply.send(());
            }
            NodeMessage::SendRecurrentSignals { reply } => {
                self.handle_send_recurrent_signals().await;
                let _ = reply.send(());
            }
        }
        false
    }

    async fn handle_sync(&mut self) {
        let sync_function = match &self.kind {
            NodeKind::Sensor { sync_function, .. } => Arc::clone(sync_function),
            _ => return,
        };
        if self.outbound.is_empty() {
            self.events
                .publish(EngineError::SensorHasNoOutboundConnections(self.id));
            return;
        }
        let pulled = sync_function.pull().await;
        let fan_out = self.outbound.len();
        if let NodeKind::Sensor {
            maximum_vector_length,
            ..
        } = &mut self.kind
        {
            *maximum_vector_length = (*maximum_vector_length).max(pulled.len());
        }
        // Zero-pad a short pull to fan-out; a long one is truncated by the
        // same resize, since excess values have no connection to zip with.
        let mut padded = pulled;
        padded.resize(fan_out, 0.0);
        let mut ordered: Vec<&OutboundConnection> = self.outbound.iter().collect();
        ordered.sort_by_key(|conn| conn.order);
        for (conn, value) in ordered.into_iter().zip(padded) {
            let _ = conn
                .target_handle
                .receive_input(conn.id, value, ActivationOption::ActivateIfBarrierIsFull)
                .await;
        }
    }

    /// Returns `true` if a structural error terminated the actor.
    async fn handle_receive_input(
        &mut self,
        connection_id: NeuronConnectionId,
        value: f64,
        option: ActivationOption,
    ) -> bool {
        if matches!(self.kind, NodeKind::Sensor { .. }) {
            self.events
                .publish(EngineError::SensorReceivedInput(self.id));
            return false;
        }
        if !self.inbound.contains_key(&connection_id) {
            self.events
                .publish(EngineError::MissingInboundConnection(self.id));
            return false;
        }
        if self.barrier.contains(connection_id) {
            self.overflow_barrier.insert(connection_id, value);
        } else {
            self.barrier.insert(connection_id, value);
        }
        let should_try = match option {
            ActivationOption::DoNotActivate => false,
            ActivationOption::ActivateIfNeuronHasOneConnection => self.inbound.len() == 1,
            ActivationOption::ActivateIfBarrierIsFull => true,
        };
        if !should_try {
            return false;
        }
        let inbound_ids: Vec<NeuronConnectionId> = self.inbound.keys().copied().collect();
        if !self.barrier.is_satisfied(inbound_ids.iter()) {
            return false;
        }
        match &self.kind {
            NodeKind::Neuron { .. } => return self.fire_neuron().await,
            NodeKind::Actuator { gating: None, .. } => self.fire_actuator().await,
            NodeKind::Actuator { gating: Some(false), .. } => self.mark_actuator_ready(),
            NodeKind::Actuator { gating: Some(true), .. } => {}
            NodeKind::Sensor { .. } => unreachable!("sensors return above"),
        }
        false
    }

    /// Marks an actuator with a registered cortex as having a satisfied
    /// barrier, without firing its output hook — that only happens once
    /// `ActivateActuator` arrives.
    fn mark_actuator_ready(&mut self) {
        if let NodeKind::Actuator { gating, .. } = &mut self.kind {
            *gating = Some(true);
        }
    }

    /// Fires the neuron. Returns `true` if a `MissingInboundConnection`
    /// structural error terminated the actor instead.
    async fn fire_neuron(&mut self) -> bool {
        let (bias, activation_fn) = match &self.kind {
            NodeKind::Neuron {
                bias, activation_fn, ..
            } => (*bias, *activation_fn),
            _ => return false,
        };
        // Inbound connections are summed and learned in their stored
        // `order`, not HashMap iteration order (spec §4.1 step 1, §8 #1).
        let mut ordered: Vec<&InboundConnection> = self.inbound.values().collect();
        ordered.sort_by_key(|conn| conn.order);

        let mut synapses: Vec<(NeuronConnectionId, f64)> = Vec::with_capacity(ordered.len());
        let mut sum = bias.unwrap_or(0.0);
        for conn in ordered {
            let synapse = match self.barrier.get(conn.id) {
                Some(value) => value,
                None => {
                    self.events
                        .publish(EngineError::MissingInboundConnection(self.id));
                    return true;
                }
            };
            sum += conn.weight * synapse;
            synapses.push((conn.id, synapse));
        }
        let output = activation_fn(sum);
        for (id, synapse) in synapses {
            if let Some(conn) = self.inbound.get_mut(&id) {
                conn.weight = self.learning_algorithm.update_weight(conn.weight, synapse, output);
            }
        }
        for conn in &self.outbound {
            let _ = conn
                .target_handle
                .receive_input(conn.id, output, ActivationOption::ActivateIfBarrierIsFull)
                .await;
        }
        self.events.publish(NeuronFired {
            id: self.id,
            output,
        });
        self.barrier.clear();
        self.barrier.take_from(&mut self.overflow_barrier);
        false
    }

    /// Fires the output hook with the current barrier and promotes
    /// overflow into it. Shared by the ungated (`gating = None`) path and
    /// by `ActivateActuator` once a cortex has granted a firing.
    async fn fire_actuator(&mut self) {
        let sum = self.barrier.sum();
        let hook = match &self.kind {
            NodeKind::Actuator { output_hook, .. } => Arc::clone(output_hook),
            _ => return,
        };
        hook.fire(sum).await;
        self.events.publish(ActuatorFired {
            id: self.id,
            value: sum,
        });
        self.barrier.clear();
        self.barrier.take_from(&mut self.overflow_barrier);
    }

    fn node_type(&self) -> NodeType {
        match &self.kind {
            NodeKind::Sensor { .. } => NodeType::Sensor {
                fan_out: self.outbound.len(),
            },
            NodeKind::Neuron { .. } => NodeType::Neuron,
            NodeKind::Actuator { .. } => NodeType::Actuator,
        }
    }

    /// Wires `self -> target`. A self-recurrent target (`target.id() ==
    /// self.id`) is handled without a mailbox round trip to `self`: since
    /// the actor is single-threaded over its own mailbox, asking itself
    /// for its record or to add an inbound connection while already
    /// inside its own message handler would deadlock forever.
    async fn handle_add_outbound_connection(
        &mut self,
        target: NodeHandle,
        weight: f64,
        order: ConnectionOrder,
        reply: oneshot::Sender<NeuronConnectionId>,
    ) {
        let connection_id = NeuronConnectionId::new();
        let is_self = target.id() == self.id;
        let (target_node_type, target_layer) = if is_self {
            (self.node_type(), self.layer)
        } else {
            match target.get_node_record().await {
                Ok(record) => (record.node_type, record.layer),
                Err(_) => return,
            }
        };
        let is_recurrent = matches!(self.kind, NodeKind::Neuron { .. })
            && matches!(target_node_type, NodeType::Neuron)
            && self.layer >= target_layer;
        if is_self {
            self.inbound.insert(
                connection_id,
                InboundConnection::new(connection_id, order, self.id, weight),
            );
        } else if target
            .add_inbound_connection(connection_id, self.self_handle.clone(), weight, order)
            .await
            .is_err()
        {
            return;
        }
        if is_recurrent {
            self.recurrent_outbound.insert(connection_id);
        }
        self.outbound
            .push(OutboundConnection::new(connection_id, order, weight, target));
        let _ = reply.send(connection_id);
    }

    fn handle_add_inbound_connection(
        &mut self,
        connection_id: NeuronConnectionId,
        from: NodeHandle,
        weight: f64,
        order: ConnectionOrder,
        reply: oneshot::Sender<()>,
    ) {
        self.inbound.insert(
            connection_id,
            InboundConnection::new(connection_id, order, from.id(), weight),
        );
        let _ = reply.send(());
    }

    fn handle_register_cortex(&mut self, reply: oneshot::Sender<()>) {
        if let NodeKind::Actuator { gating, .. } = &mut self.kind {
            if gating.is_none() {
                *gating = Some(false);
            }
        }
        let _ = reply.send(());
    }

    /// Only fires if a cortex has already marked this actuator ready
    /// (`gating = Some(true)`); otherwise this is a no-op, matching the
    /// message table's "others: ignored".
    async fn handle_activate_actuator(&mut self, reply: oneshot::Sender<()>) {
        let ready = matches!(self.kind, NodeKind::Actuator { gating: Some(true), .. });
        if ready {
            self.fire_actuator().await;
            if let NodeKind::Actuator { gating, .. } = &mut self.kind {
                *gating = Some(false);
            }
        }
        let _ = reply.send(());
    }

    async fn handle_reset_neuron(&mut self) {
        for conn in self.inbound.values_mut() {
            conn.reset_weight();
        }
        self.barrier.clear();
        self.overflow_barrier.clear();
        let mut deferred = Vec::new();
        while let Ok(message) = self.mailbox.try_recv() {
            match message {
                NodeMessage::ReceiveInput { .. } => continue,
                other => deferred.push(other),
            }
        }
        for message in deferred {
            Box::pin(self.handle(message)).await;
        }
    }

    async fn handle_send_recurrent_signals(&mut self) {
        let ids: Vec<NeuronConnectionId> = self.recurrent_outbound.iter().copied().collect();
        for id in ids {
            if let Some(conn) = self.outbound.iter().find(|c| c.id == id) {
                let _ = conn
                    .target_handle
                    .receive_input(id, 0.0, ActivationOption::ActivateIfNeuronHasOneConnection)
                    .await;
                self.events.publish(RecurrentSignalSent {
                    from: self.id,
                    to: conn.target,
                });
            }
        }
    }

    /// Ready iff the mailbox is empty and, when `check_actuators` is set,
    /// this is not an actuator with a registered cortex still waiting for
    /// its barrier to fill (`gating = Some(false)`). A cortex-gated
    /// actuator whose barrier is already full (`gating = Some(true)`)
    /// counts as ready: nothing more will happen until an external
    /// `ActivateActuator` arrives, which this node cannot itself wait on.
    fn is_ready(&self, check_actuators: bool) -> bool {
        if self.mailbox.len() > 0 {
            return false;
        }
        if check_actuators {
            if let NodeKind::Actuator {
                gating: Some(false),
                ..
            } = &self.kind
            {
                return false;
            }
        }
        true
    }

    fn to_record(&self) -> NodeRecord {
        let inbound_connections: HashMap<NeuronConnectionId, InactiveConnection> = self
            .inbound
            .iter()
            .map(|(id, conn)| (*id, InactiveConnection::from(conn)))
            .collect();
        let (node_type, bias, activation_function_id, sync_function_id, output_hook_id, maximum_vector_length) =
            match &self.kind {
                NodeKind::Sensor {
                    sync_function_id,
                    maximum_vector_length,
                    ..
                } => (
                    NodeType::Sensor {
                        fan_out: self.outbound.len(),
                    },
                    None,
                    None,
                    sync_function_id.clone(),
                    None,
                    Some(*maximum_vector_length),
                ),
                NodeKind::Neuron {
                    bias,
                    activation_function_id,
                    ..
                } => (
                    NodeType::Neuron,
                    *bias,
                    activation_function_id.clone(),
                    None,
                    None,
                    None,
                ),
                NodeKind::Actuator {
                    output_hook_id, ..
                } => (
                    NodeType::Actuator,
                    None,
                    None,
                    None,
                    output_hook_id.clone(),
                    None,
                ),
            };
        NodeRecord {
            id: self.id,
            layer: self.layer,
            node_type,
            inbound_connections,
            bias,
            activation_function_id,
            sync_function_id,
            output_hook_id,
            maximum_vector_length,
            learning_algorithm: self.learning_algorithm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{FnOutputHook, FnSyncFunction};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn timings() -> NodeTimings {
        NodeTimings::default()
    }

    #[tokio::test]
    async fn sensor_inflates_single_value_to_its_fan_out() {
        let broker = Arc::new(EventBroker::new());
        let sync = Arc::new(FnSyncFunction::new(|| vec![1.0]));
        let sensor = NodeActor::spawn_sensor(
            NodeId::new(),
            0,
            sync,
            None,
            timings(),
            Arc::clone(&broker),
        );
        let seen = Arc::new(AtomicU64::new(0));
        let seen_clone = Arc::clone(&seen);
        let hook = Arc::new(FnOutputHook::new(move |v: f64| {
            seen_clone.store(v.to_bits(), Ordering::SeqCst);
        }));
        let actuator =
            NodeActor::spawn_actuator(NodeId::new(), 1, hook, None, timings(), broker);
        sensor
            .add_outbound_connection(actuator.clone(), 1.0, 0)
            .await
            .unwrap();
        sensor
            .add_outbound_connection(actuator.clone(), 1.0, 1)
            .await
            .unwrap();
        sensor.sync().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(f64::from_bits(seen.load(Ordering::SeqCst)), 2.0);
    }

    #[tokio::test]
    async fn single_identity_neuron_forwards_its_only_input() {
        let broker = Arc::new(EventBroker::new());
        let neuron = NodeActor::spawn_neuron_with_events(
            NodeId::new(),
            0,
            Some(0.0),
            Some("identity".to_string()),
            LearningAlgorithm::NoLearning,
            timings(),
            Arc::clone(&broker),
        );
        let seen = Arc::new(AtomicU64::new(u64::MAX));
        let seen_clone = Arc::clone(&seen);
        let hook = Arc::new(FnOutputHook::new(move |v: f64| {
            seen_clone.store(v.to_bits(), Ordering::SeqCst);
        }));
        let actuator =
            NodeActor::spawn_actuator(NodeId::new(), 1, hook, None, timings(), broker.clone());
        let sync = Arc::new(FnSyncFunction::new(|| vec![3.0]));
        let sensor = NodeActor::spawn_sensor(NodeId::new(), 0, sync, None, timings(), broker);
        neuron
            .add_outbound_connection(actuator, 1.0, 0)
            .await
            .unwrap();
        sensor
            .add_outbound_connection(neuron.clone(), 2.0, 0)
            .await
            .unwrap();
        sensor.sync().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(f64::from_bits(seen.load(Ordering::SeqCst)), 6.0);
    }

    #[tokio::test]
    async fn two_input_neuron_waits_for_both_synapses() {
        let broker = Arc::new(EventBroker::new());
        let neuron = NodeActor::spawn_neuron_with_events(
            NodeId::new(),
            1,
            Some(0.0),
            Some("identity".to_string()),
            LearningAlgorithm::NoLearning,
            timings(),
            Arc::clone(&broker),
        );
        let seen = Arc::new(AtomicU64::new(u64::MAX));
        let seen_clone = Arc::clone(&seen);
        let hook = Arc::new(FnOutputHook::new(move |v: f64| {
            seen_clone.store(v.to_bits(), Ordering::SeqCst);
        }));
        let actuator = NodeActor::spawn_actuator(NodeId::new(), 2, hook, None, timings(), broker);
        neuron
            .add_outbound_connection(actuator, 1.0, 0)
            .await
            .unwrap();
        let record = neuron.get_node_record().await.unwrap();
        assert!(record.inbound_connections.is_empty());

        let a_conn = NeuronConnectionId::new();
        let b_conn = NeuronConnectionId::new();
        // Emulate two upstream sensors wiring directly via AddInboundConnection.
        neuron
            .add_inbound_connection(a_conn, neuron.clone(), 1.0, 0)
            .await
            .unwrap();
        neuron
            .add_inbound_connection(b_conn, neuron.clone(), 1.0, 1)
            .await
            .unwrap();

        neuron
            .receive_input(a_conn, 1.0, ActivationOption::ActivateIfBarrierIsFull)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(f64::from_bits(seen.load(Ordering::SeqCst)), u64::MAX);

        neuron
            .receive_input(b_conn, 2.0, ActivationOption::ActivateIfBarrierIsFull)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(f64::from_bits(seen.load(Ordering::SeqCst)), 3.0);
    }

    #[tokio::test]
    async fn hebbian_neuron_updates_weight_then_reset_restores_it() {
        let broker = Arc::new(EventBroker::new());
        let neuron = NodeActor::spawn_neuron_with_events(
            NodeId::new(),
            0,
            Some(0.0),
            Some("identity".to_string()),
            LearningAlgorithm::Hebbian { rate: 0.5 },
            timings(),
            broker,
        );
        let conn_id = NeuronConnectionId::new();
        neuron
            .add_inbound_connection(conn_id, neuron.clone(), 1.0, 0)
            .await
            .unwrap();
        neuron
            .receive_input(conn_id, 2.0, ActivationOption::ActivateIfBarrierIsFull)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let record = neuron.get_node_record().await.unwrap();
        let updated = record.inbound_connections.get(&conn_id).unwrap();
        // output = identity(1.0 * 2.0) = 2.0; weight' = 1.0 + 0.5 * 2.0 * 2.0 = 3.0
        assert_eq!(updated.weight, 3.0);

        neuron.reset_neuron().await.unwrap();
        let record = neuron.get_node_record().await.unwrap();
        let reset = record.inbound_connections.get(&conn_id).unwrap();
        assert_eq!(reset.weight, 1.0);
    }

    #[tokio::test]
    async fn cortex_gated_actuator_only_fires_once_activated() {
        let broker = Arc::new(EventBroker::new());
        let seen = Arc::new(AtomicU64::new(u64::MAX));
        let seen_clone = Arc::clone(&seen);
        let hook = Arc::new(FnOutputHook::new(move |v: f64| {
            seen_clone.store(v.to_bits(), Ordering::SeqCst);
        }));
        let actuator = NodeActor::spawn_actuator(NodeId::new(), 0, hook, None, timings(), broker);
        actuator.register_cortex().await.unwrap();
        let conn_id = NeuronConnectionId::new();
        actuator
            .add_inbound_connection(conn_id, actuator.clone(), 1.0, 0)
            .await
            .unwrap();
        actuator
            .receive_input(conn_id, 5.0, ActivationOption::ActivateIfBarrierIsFull)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(seen.load(Ordering::SeqCst), u64::MAX);

        actuator.activate_actuator().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(f64::from_bits(seen.load(Ordering::SeqCst)), 5.0);
    }
}
