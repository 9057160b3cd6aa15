//! Graph wiring primitives.
//!
//! These are the only supported ways to connect two live nodes: each one
//! drives the two-phase handshake (`AddOutboundConnection` on the source
//! waits for the target's `AddInboundConnection` ack) hidden inside
//! [`crate::node::handle::NodeHandle::add_outbound_connection`], and
//! returns the minted [`NeuronConnectionId`] so callers can address the
//! connection later (for example to drop it, though removal is not
//! currently exposed — connections live for the lifetime of both nodes).

use crate::connection::ConnectionOrder;
use crate::error::Result;
use crate::ids::NeuronConnectionId;
use crate::node::handle::NodeHandle;

/// Wires a neuron's output to another neuron's input.
pub async fn connect_node_to_node(
    source: &NodeHandle,
    target: &NodeHandle,
    weight: f64,
) -> Result<NeuronConnectionId> {
    source.add_outbound_connection(target.clone(), weight, 0).await
}

/// Wires a neuron's output to an actuator's input.
pub async fn connect_node_to_actuator(
    source: &NodeHandle,
    actuator: &NodeHandle,
    weight: f64,
) -> Result<NeuronConnectionId> {
    source.add_outbound_connection(actuator.clone(), weight, 0).await
}

/// Wires one fan-out slot of a sensor to a downstream node. `order` fixes
/// which element of the sensor's (possibly inflated) pull vector this
/// connection receives; callers are responsible for wiring orders
/// `0..fan_out` so every slot has a destination.
pub async fn connect_sensor_to_node(
    sensor: &NodeHandle,
    target: &NodeHandle,
    weight: f64,
    order: ConnectionOrder,
) -> Result<NeuronConnectionId> {
    sensor.add_outbound_connection(target.clone(), weight, order).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodeTimings;
    use crate::event_broker::EventBroker;
    use crate::hooks::{FnOutputHook, FnSyncFunction};
    use crate::ids::NodeId;
    use crate::learning::LearningAlgorithm;
    use crate::node::actor::NodeActor;
    use std::sync::Arc;

    #[tokio::test]
    async fn connect_sensor_to_node_assigns_the_given_order() {
        let broker = Arc::new(EventBroker::new());
        let sync = Arc::new(FnSyncFunction::new(|| vec![1.0, 2.0]));
        let sensor = NodeActor::spawn_sensor(
            NodeId::new(),
            0,
            sync,
            None,
            NodeTimings::default(),
            Arc::clone(&broker),
        );
        let neuron = NodeActor::spawn_neuron_with_events(
            NodeId::new(),
            1,
            Some(0.0),
            Some("identity".to_string()),
            LearningAlgorithm::NoLearning,
            NodeTimings::default(),
            broker,
        );
        let conn_id = connect_sensor_to_node(&sensor, &neuron, 1.0, 1).await.unwrap();
        let record = neuron.get_node_record().await.unwrap();
        assert_eq!(record.inbound_connections.get(&conn_id).unwrap().order, 1);
    }

    #[tokio::test]
    async fn connect_node_to_actuator_wires_a_single_connection() {
        let broker = Arc::new(EventBroker::new());
        let neuron = NodeActor::spawn_neuron_with_events(
            NodeId::new(),
            0,
            Some(0.0),
            None,
            LearningAlgorithm::NoLearning,
            NodeTimings::default(),
            Arc::clone(&broker),
        );
        let hook = Arc::new(FnOutputHook::new(|_: f64| {}));
        let actuator =
            NodeActor::spawn_actuator(NodeId::new(), 1, hook, None, NodeTimings::default(), broker);
        let conn_id = connect_node_to_actuator(&neuron, &actuator, 0.5).await.unwrap();
        let record = actuator.get_node_record().await.unwrap();
        assert!(record.inbound_connections.contains_key(&conn_id));
    }
}
