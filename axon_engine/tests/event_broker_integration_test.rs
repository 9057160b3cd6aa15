//! Integration test for the event broker.
//!
//! Checks that nodes spawned from separate builders still publish onto a
//! shared broker and that subscribers registered before any node spawns
//! see every lifecycle event.

use axon_engine::builder::NetworkBuilder;
use axon_engine::config::NodeTimings;
use axon_engine::events::{NeuronFired, NodeDied, NodeSpawned};
use axon_engine::hooks::FnSyncFunction;
use axon_engine::learning::LearningAlgorithm;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn lifecycle_events_reach_subscribers_registered_before_spawn() {
    let builder = NetworkBuilder::new(NodeTimings::default());
    let broker = builder.events();

    let spawned = Arc::new(AtomicUsize::new(0));
    let spawned_clone = Arc::clone(&spawned);
    broker.subscribe(move |_: Arc<NodeSpawned>| {
        spawned_clone.fetch_add(1, Ordering::SeqCst);
    });

    let died = Arc::new(AtomicUsize::new(0));
    let died_clone = Arc::clone(&died);
    broker.subscribe(move |_: Arc<NodeDied>| {
        died_clone.fetch_add(1, Ordering::SeqCst);
    });

    let neuron = builder.spawn_neuron(0, Some(0.0), Some("identity".to_string()), LearningAlgorithm::NoLearning);
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    assert_eq!(spawned.load(Ordering::SeqCst), 1);

    neuron.die().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    assert_eq!(died.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn neuron_fired_event_carries_the_activation() {
    let builder = NetworkBuilder::new(NodeTimings::default());
    let broker = builder.events();
    let last_output = Arc::new(std::sync::atomic::AtomicU64::new(u64::MAX));
    let last_output_clone = Arc::clone(&last_output);
    broker.subscribe(move |event: Arc<NeuronFired>| {
        last_output_clone.store(event.output.to_bits(), Ordering::SeqCst);
    });

    let sensor = builder.spawn_sensor(0, Arc::new(FnSyncFunction::new(|| vec![4.0])), None);
    let neuron = builder.spawn_neuron(1, Some(0.0), Some("identity".to_string()), LearningAlgorithm::NoLearning);
    sensor.add_outbound_connection(neuron.clone(), 2.0, 0).await.unwrap();
    sensor.sync().await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    assert_eq!(f64::from_bits(last_output.load(Ordering::SeqCst)), 8.0);
}
