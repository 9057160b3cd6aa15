//! Activation functions and the process-wide registry that lets a
//! [`NodeRecord`](crate::record::NodeRecord)'s `ActivationFunctionId` round-trip
//! to the same function across a save/load cycle.
//!
//! The registry mirrors the reference crate's own `once_cell`-backed global
//! telemetry registry: a single lazily-initialised `RwLock` guarding a
//! `HashMap`, read on every activation and written only when a caller
//! registers a new function.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

/// A pure, total function from a weighted input sum to a neuron's output.
pub type ActivationFn = fn(f64) -> f64;

/// Logistic sigmoid, the engine's default activation.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Identity function, useful for tests that want the raw weighted sum.
pub fn identity(x: f64) -> f64 {
    x
}

/// Hyperbolic tangent.
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// Rectified linear unit.
pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

/// Key into the activation-function registry. Carried verbatim on
/// [`NodeRecord`](crate::record::NodeRecord) so a record can be rehydrated
/// into an actor using the same function it was saved with.
pub type ActivationFunctionId = String;

/// The id under which [`sigmoid`] is registered by default.
pub const DEFAULT_ACTIVATION_ID: &str = "sigmoid";

static REGISTRY: Lazy<RwLock<HashMap<ActivationFunctionId, ActivationFn>>> = Lazy::new(|| {
    let mut map: HashMap<ActivationFunctionId, ActivationFn> = HashMap::new();
    map.insert("sigmoid".to_string(), sigmoid as ActivationFn);
    map.insert("identity".to_string(), identity as ActivationFn);
    map.insert("tanh".to_string(), tanh as ActivationFn);
    map.insert("relu".to_string(), relu as ActivationFn);
    RwLock::new(map)
});

/// Registers `f` under `id`, overwriting any previous registration.
///
/// Intended for callers that need a custom activation function; the four
/// built-ins are always available without calling this.
pub fn register(id: impl Into<ActivationFunctionId>, f: ActivationFn) {
    REGISTRY.write().unwrap().insert(id.into(), f);
}

/// Looks up a previously registered activation function by id.
pub fn lookup(id: &str) -> Option<ActivationFn> {
    REGISTRY.read().unwrap().get(id).copied()
}

/// Resolves an optional `ActivationFunctionId` to a function, falling back
/// to [`sigmoid`] when `id` is `None` or unregistered.
pub fn resolve(id: Option<&str>) -> ActivationFn {
    id.and_then(lookup).unwrap_or(sigmoid as ActivationFn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn default_registry_resolves_builtins() {
        assert_eq!(lookup("sigmoid").unwrap()(0.0), sigmoid(0.0));
        assert_eq!(lookup("identity").unwrap()(3.0), 3.0);
        assert_eq!(lookup("relu").unwrap()(-1.0), 0.0);
        assert!(lookup("nonexistent").is_none());
    }

    #[test]
    fn resolve_falls_back_to_sigmoid() {
        let f = resolve(Some("nonexistent"));
        assert_eq!(f(0.0), sigmoid(0.0));
        let f = resolve(None);
        assert_eq!(f(0.0), sigmoid(0.0));
    }

    #[test]
    fn custom_activation_can_be_registered() {
        fn double(x: f64) -> f64 {
            x * 2.0
        }
        register("double", double);
        assert_eq!(lookup("double").unwrap()(3.0), 6.0);
    }
}
