//! Network-level coordination: the handful of operations that act on the
//! whole node population rather than a single actor.
//!
//! A [`NetworkCoordinator`] does not own the nodes — it only holds handles
//! — so it is cheap to build a fresh one scoped to any subset of a
//! network (all nodes, or just its actuators) and discard it once a
//! coordination step is done.

use crate::config::CoordinatorConfig;
use crate::error::Result;
use crate::node::handle::NodeHandle;
use crate::node::message::NodeStatus;
use futures::future::join_all;
use tokio::time::sleep;

/// Coordinates a set of node handles: quiescence waiting, broadcast sync,
/// broadcast actuator activation, and teardown.
pub struct NetworkCoordinator {
    nodes: Vec<NodeHandle>,
    config: CoordinatorConfig,
}

impl NetworkCoordinator {
    pub fn new(nodes: Vec<NodeHandle>, config: CoordinatorConfig) -> Self {
        Self { nodes, config }
    }

    /// Polls every node's status until all report [`NodeStatus::Ready`], or
    /// `deadline` elapses. `deadline` of `None` polls forever. Returns `true`
    /// once every node is ready, or `false` if `deadline` elapses first —
    /// budget expiry is a normal outcome, not an error. A node that fails to
    /// answer its status probe within its own reply budget (~500ms) is a
    /// genuine fault and surfaces as `Err(NeuronInstanceUnavailable)`.
    pub async fn wait_on_neural_network(
        &self,
        check_actuators: bool,
        deadline: Option<tokio::time::Duration>,
    ) -> Result<bool> {
        let start = tokio::time::Instant::now();
        loop {
            let mut all_ready = true;
            for node in &self.nodes {
                let status = node.get_node_status(check_actuators).await?;
                if status == NodeStatus::Busy {
                    all_ready = false;
                    break;
                }
            }
            if all_ready {
                return Ok(true);
            }
            if let Some(deadline) = deadline {
                if start.elapsed() >= deadline {
                    return Ok(false);
                }
            }
            sleep(self.config.poll_interval).await;
        }
    }

    /// Broadcasts `Sync` to every node in parallel. Neurons and actuators
    /// ignore it; sensors pull fresh input and fan out.
    pub async fn synchronize_nn(&self) -> Result<()> {
        join_all(self.nodes.iter().map(|node| node.sync()))
            .await
            .into_iter()
            .collect::<Result<Vec<()>>>()?;
        Ok(())
    }

    /// Broadcasts `ActivateActuator` to every node in parallel.
    /// Non-actuators ignore it.
    pub async fn activate_actuators(&self) -> Result<()> {
        join_all(self.nodes.iter().map(|node| node.activate_actuator()))
            .await
            .into_iter()
            .collect::<Result<Vec<()>>>()?;
        Ok(())
    }

    /// Waits for quiescence (without requiring actuator readiness), then
    /// tears down every node in the set by broadcasting `Die` to each in
    /// parallel and awaiting every acknowledgment.
    pub async fn kill_neural_network(&self) -> Result<()> {
        self.wait_on_neural_network(false, None).await?;
        join_all(self.nodes.iter().map(|node| node.die()))
            .await
            .into_iter()
            .collect::<Result<Vec<()>>>()?;
        Ok(())
    }
}
