//! The activation barrier and its overflow companion.
//!
//! A barrier is the set of synapses received so far in the current
//! activation cycle, keyed by connection id. It is *satisfied* once it
//! holds an entry for every connection in the owning node's inbound list.
//! A second synapse for a connection id already present in the barrier is
//! not a protocol violation: message delivery between actors makes no
//! promise about cycle boundaries, so it is simply deferred to the
//! overflow barrier for the next cycle (see `ReceiveInput` in the node
//! actor).

use crate::ids::NeuronConnectionId;
use std::collections::HashMap;

/// Synapses accumulated for a single activation cycle.
#[derive(Debug, Clone, Default)]
pub struct Barrier {
    synapses: HashMap<NeuronConnectionId, f64>,
}

impl Barrier {
    /// An empty barrier.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `id` already has a synapse recorded this cycle.
    pub fn contains(&self, id: NeuronConnectionId) -> bool {
        self.synapses.contains_key(&id)
    }

    /// Records a synapse for `id`, overwriting any prior value. Callers
    /// must check [`Barrier::contains`] first if overflow semantics are
    /// required; this method does not defer on its own.
    pub fn insert(&mut self, id: NeuronConnectionId, value: f64) {
        self.synapses.insert(id, value);
    }

    /// Looks up the synapse recorded for `id`, if any.
    pub fn get(&self, id: NeuronConnectionId) -> Option<f64> {
        self.synapses.get(&id).copied()
    }

    /// A barrier is satisfied when it holds an entry for every id in
    /// `inbound_ids`.
    pub fn is_satisfied<'a>(&self, inbound_ids: impl IntoIterator<Item = &'a NeuronConnectionId>) -> bool {
        inbound_ids.into_iter().all(|id| self.synapses.contains_key(id))
    }

    /// Sum of every synapse currently held, used by actuators (which do
    /// not weight their inputs).
    pub fn sum(&self) -> f64 {
        self.synapses.values().sum()
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.synapses.clear();
    }

    /// Replaces this barrier's contents with `other`'s, leaving `other`
    /// empty. Used to promote the overflow barrier into the current one
    /// at firing time.
    pub fn take_from(&mut self, other: &mut Barrier) {
        self.synapses = std::mem::take(&mut other.synapses);
    }

    /// True if no synapses have been recorded.
    pub fn is_empty(&self) -> bool {
        self.synapses.is_empty()
    }
}
