//! The persistent, round-trippable shape of a node.
//!
//! A [`NodeRecord`] is what `GetNodeRecord` snapshots out of a live actor
//! and what [`crate::builder`] rehydrates a fresh actor from. Persistence
//! to disk is out of scope for this crate (per the spec's non-goals); the
//! record only needs to serialize cleanly, which it does via `serde`.

use crate::activation::ActivationFunctionId;
use crate::connection::InactiveConnection;
use crate::ids::{NeuronConnectionId, NodeId};
use crate::learning::LearningAlgorithm;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The three node roles. Sensors additionally carry their fan-out (number
/// of outbound connections), since that count fixes the length a sensor's
/// sync function output is inflated or truncated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Neuron,
    Sensor { fan_out: usize },
    Actuator,
}

/// The full persisted state of one node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub layer: i64,
    pub node_type: NodeType,
    pub inbound_connections: HashMap<NeuronConnectionId, InactiveConnection>,
    pub bias: Option<f64>,
    pub activation_function_id: Option<ActivationFunctionId>,
    /// Opaque label for the external sync function a sensor pulls from.
    /// The core never resolves this to a callable itself; the wiring
    /// layer is responsible for reattaching the real function when
    /// rehydrating a sensor (see `crate::builder`).
    pub sync_function_id: Option<String>,
    /// Opaque label for the external output hook an actuator fires into.
    /// Same caveat as `sync_function_id`.
    pub output_hook_id: Option<String>,
    /// Largest input-vector length a sensor has ever observed from its
    /// sync function. `None` for non-sensors.
    pub maximum_vector_length: Option<usize>,
    pub learning_algorithm: LearningAlgorithm,
}

impl NodeRecord {
    /// True if this record describes a sensor.
    pub fn is_sensor(&self) -> bool {
        matches!(self.node_type, NodeType::Sensor { .. })
    }

    /// The sensor's current fan-out, or `None` for non-sensors.
    pub fn fan_out(&self) -> Option<usize> {
        match self.node_type {
            NodeType::Sensor { fan_out } => Some(fan_out),
            _ => None,
        }
    }
}
