//! Timing and coordination knobs threaded through construction rather than
//! hard-coded, so tests can run faster than the spec's real-time defaults.

use std::time::Duration;

/// Timing budgets for a single node actor.
#[derive(Debug, Clone, Copy)]
pub struct NodeTimings {
    /// How long the actor's mailbox receive blocks before timing out and
    /// re-entering the loop. A timeout is not an error; it exists purely
    /// to give the actor periodic liveness checks without busy-waiting.
    pub mailbox_poll_timeout: Duration,
    /// How long a caller waits for a reply to a command or status probe
    /// before treating the node as unavailable.
    pub status_reply_budget: Duration,
}

impl Default for NodeTimings {
    fn default() -> Self {
        Self {
            mailbox_poll_timeout: Duration::from_millis(250),
            status_reply_budget: Duration::from_millis(500),
        }
    }
}

/// Knobs for [`crate::coordinator::NetworkCoordinator`]. Whether a given
/// wait requires cortex-gated actuators to be in their "ready to fire"
/// sub-state is a per-call argument to `wait_on_neural_network`, not a
/// fixed setting here, since a coordinator commonly needs both modes
/// (plain quiescence before teardown, actuator-aware quiescence before a
/// firing broadcast) over the same node set.
#[derive(Debug, Clone, Copy)]
pub struct CoordinatorConfig {
    /// How long to sleep between successive `GetNodeStatus` sweeps while
    /// waiting for quiescence.
    pub poll_interval: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_budgets() {
        let timings = NodeTimings::default();
        assert_eq!(timings.mailbox_poll_timeout, Duration::from_millis(250));
        assert_eq!(timings.status_reply_budget, Duration::from_millis(500));
    }
}
