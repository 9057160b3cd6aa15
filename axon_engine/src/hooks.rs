//! External collaborators the core treats as opaque: sensors pull data
//! from a [`SyncFunction`], actuators push results to an [`OutputHook`].
//!
//! Both are modelled as `async_trait` objects rather than plain closures
//! because the spec frames them as external, possibly I/O-bound
//! collaborators (a real sync function might poll a sensor device or an
//! HTTP endpoint); a closure adapter is provided for the common case where
//! the caller only has a synchronous function in hand.

use async_trait::async_trait;

/// Supplies a sensor with a (possibly variable-length) data vector once
/// per `Sync` message. The core does not interpret the values; it only
/// inflates/truncates the vector to the sensor's fan-out.
#[async_trait]
pub trait SyncFunction: Send + Sync {
    async fn pull(&self) -> Vec<f64>;
}

/// Receives an actuator's summed barrier once per firing. The core does
/// not interpret the value or await anything from the hook beyond its
/// completion.
#[async_trait]
pub trait OutputHook: Send + Sync {
    async fn fire(&self, value: f64);
}

/// Adapts a plain synchronous closure into a [`SyncFunction`].
pub struct FnSyncFunction<F>(F)
where
    F: Fn() -> Vec<f64> + Send + Sync;

impl<F> FnSyncFunction<F>
where
    F: Fn() -> Vec<f64> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> SyncFunction for FnSyncFunction<F>
where
    F: Fn() -> Vec<f64> + Send + Sync,
{
    async fn pull(&self) -> Vec<f64> {
        (self.0)()
    }
}

/// Adapts a plain synchronous closure into an [`OutputHook`].
pub struct FnOutputHook<F>(F)
where
    F: Fn(f64) + Send + Sync;

impl<F> FnOutputHook<F>
where
    F: Fn(f64) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> OutputHook for FnOutputHook<F>
where
    F: Fn(f64) + Send + Sync,
{
    async fn fire(&self, value: f64) {
        (self.0)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn fn_sync_function_forwards_closure_result() {
        let sync = FnSyncFunction::new(|| vec![1.0, 2.0, 3.0]);
        assert_eq!(sync.pull().await, vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn fn_output_hook_invokes_closure_with_value() {
        let seen = Arc::new(AtomicU64::new(0));
        let seen_clone = Arc::clone(&seen);
        let hook = FnOutputHook::new(move |v: f64| {
            seen_clone.store(v.to_bits(), Ordering::SeqCst);
        });
        hook.fire(0.5).await;
        assert_eq!(f64::from_bits(seen.load(Ordering::SeqCst)), 0.5);
    }
}
