//! Construction helpers for spawning fresh nodes and for rehydrating a
//! node's inbound state from a previously captured [`NodeRecord`].
//!
//! A [`NetworkBuilder`] bundles the two knobs every spawn needs (timing
//! budgets, and the event broker the whole network should share) so call
//! sites don't have to thread them through individually, the way
//! `SynapseBuilder` bundles a synapse's invariants in the teacher crate
//! this one is descended from.

use crate::activation::ActivationFunctionId;
use crate::config::NodeTimings;
use crate::error::Result;
use crate::event_broker::EventBroker;
use crate::hooks::{OutputHook, SyncFunction};
use crate::ids::NodeId;
use crate::learning::LearningAlgorithm;
use crate::node::actor::NodeActor;
use crate::node::handle::NodeHandle;
use crate::record::NodeRecord;
use std::sync::Arc;

/// Spawns nodes that all share one timing configuration and one event
/// broker.
#[derive(Clone)]
pub struct NetworkBuilder {
    timings: NodeTimings,
    events: Arc<EventBroker>,
}

impl NetworkBuilder {
    pub fn new(timings: NodeTimings) -> Self {
        Self {
            timings,
            events: Arc::new(EventBroker::new()),
        }
    }

    /// The event broker every node spawned from this builder publishes
    /// onto. Clone this out to subscribe before spawning any nodes, so no
    /// early event is missed.
    pub fn events(&self) -> Arc<EventBroker> {
        Arc::clone(&self.events)
    }

    /// Spawns a sensor with no outbound connections yet; its fan-out
    /// grows (and its `GetNodeRecord` snapshot reflects that growth) as
    /// `crate::wiring::connect_sensor_to_node` wires it up.
    pub fn spawn_sensor(
        &self,
        layer: i64,
        sync_function: Arc<dyn SyncFunction>,
        sync_function_id: Option<String>,
    ) -> NodeHandle {
        NodeActor::spawn_sensor(
            NodeId::new(),
            layer,
            sync_function,
            sync_function_id,
            self.timings,
            self.events(),
        )
    }

    pub fn spawn_neuron(
        &self,
        layer: i64,
        bias: Option<f64>,
        activation_function_id: Option<ActivationFunctionId>,
        learning_algorithm: LearningAlgorithm,
    ) -> NodeHandle {
        NodeActor::spawn_neuron_with_events(
            NodeId::new(),
            layer,
            bias,
            activation_function_id,
            learning_algorithm,
            self.timings,
            self.events(),
        )
    }

    pub fn spawn_actuator(
        &self,
        layer: i64,
        output_hook: Arc<dyn OutputHook>,
        output_hook_id: Option<String>,
    ) -> NodeHandle {
        NodeActor::spawn_actuator(
            NodeId::new(),
            layer,
            output_hook,
            output_hook_id,
            self.timings,
            self.events(),
        )
    }

    /// Rebuilds a neuron from a captured record, re-wiring each inbound
    /// connection it had at snapshot time. `resolve_source` maps the
    /// originating node's id back to a live handle — callers are expected
    /// to have already rehydrated (or never torn down) that node.
    ///
    /// Outbound connections are not part of a [`NodeRecord`] (see its
    /// doc comment) and so are not restored here; reconnect them with
    /// [`crate::wiring`] after rehydration if needed.
    pub async fn rehydrate_neuron(
        &self,
        record: &NodeRecord,
        resolve_source: impl Fn(NodeId) -> Option<NodeHandle>,
    ) -> Result<NodeHandle> {
        let neuron = NodeActor::spawn_neuron_with_events(
            record.id,
            record.layer,
            record.bias,
            record.activation_function_id.clone(),
            record.learning_algorithm,
            self.timings,
            self.events(),
        );
        self.restore_inbound(&neuron, record, resolve_source).await?;
        Ok(neuron)
    }

    /// Rebuilds an actuator from a captured record. See
    /// [`Self::rehydrate_neuron`] for the inbound-restoration caveat.
    pub async fn rehydrate_actuator(
        &self,
        record: &NodeRecord,
        output_hook: Arc<dyn OutputHook>,
        resolve_source: impl Fn(NodeId) -> Option<NodeHandle>,
    ) -> Result<NodeHandle> {
        let actuator = NodeActor::spawn_actuator(
            record.id,
            record.layer,
            output_hook,
            record.output_hook_id.clone(),
            self.timings,
            self.events(),
        );
        self.restore_inbound(&actuator, record, resolve_source).await?;
        Ok(actuator)
    }

    async fn restore_inbound(
        &self,
        node: &NodeHandle,
        record: &NodeRecord,
        resolve_source: impl Fn(NodeId) -> Option<NodeHandle>,
    ) -> Result<()> {
        for (connection_id, inactive) in &record.inbound_connections {
            if let Some(source) = resolve_source(inactive.source) {
                node.add_inbound_connection(*connection_id, source, inactive.weight, inactive.order)
                    .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{FnOutputHook, FnSyncFunction};

    #[tokio::test]
    async fn spawned_sensor_record_reflects_fan_out() {
        let builder = NetworkBuilder::new(NodeTimings::default());
        let sensor = builder.spawn_sensor(0, Arc::new(FnSyncFunction::new(|| vec![0.0])), None);
        let target = builder.spawn_neuron(1, None, None, LearningAlgorithm::NoLearning);
        for order in 0..3 {
            sensor
                .add_outbound_connection(target.clone(), 1.0, order)
                .await
                .unwrap();
        }
        let record = sensor.get_node_record().await.unwrap();
        assert_eq!(record.fan_out(), Some(3));
    }

    #[tokio::test]
    async fn rehydrate_neuron_restores_inbound_connection() {
        let builder = NetworkBuilder::new(NodeTimings::default());
        let source = builder.spawn_neuron(0, None, None, LearningAlgorithm::NoLearning);
        let original = builder.spawn_neuron(1, Some(0.1), None, LearningAlgorithm::NoLearning);
        let conn_id = source
            .add_outbound_connection(original.clone(), 0.75, 0)
            .await
            .unwrap();
        let record = original.get_node_record().await.unwrap();
        original.die().await.unwrap();

        let source_id = source.id();
        let rehydrated = builder
            .rehydrate_neuron(&record, |id| if id == source_id { Some(source.clone()) } else { None })
            .await
            .unwrap();
        let rehydrated_record = rehydrated.get_node_record().await.unwrap();
        let restored = rehydrated_record.inbound_connections.get(&conn_id).unwrap();
        assert_eq!(restored.weight, 0.75);
        assert_eq!(restored.source, source_id);
    }
}
