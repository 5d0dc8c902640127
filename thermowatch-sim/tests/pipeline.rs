//! End-to-end tests: sensor → publisher → channel → monitor

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use thermowatch_core::{Monitor, MonitorConfig, Sample, StatisticsReport};
use thermowatch_sim::{
    consume, run_simulation, ChannelObserver, RandomWalkSensor, RecordingObserver, SamplingLoop,
    SensorPublisher, SimConfig, SimError, SimulatedPacer,
};

const START: i64 = 1_620_095_103;

fn collector() -> (Arc<Mutex<Vec<StatisticsReport>>>, impl FnMut(&StatisticsReport) + Send + 'static) {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let reports = Arc::clone(&reports);
        move |report: &StatisticsReport| reports.lock().unwrap().push(*report)
    };
    (reports, sink)
}

#[test]
fn every_observer_sees_the_same_samples() {
    let (tx, rx) = mpsc::channel();
    let recorder = RecordingObserver::new();

    let mut publisher = SensorPublisher::new("temperature");
    publisher.register_observer(recorder.clone());
    publisher.register_observer(ChannelObserver::new(tx));

    let mut sampling = SamplingLoop::new(
        RandomWalkSensor::new(25.0, 3.0, Some(11)),
        publisher,
        SimulatedPacer::starting_at(START),
        5,
    )
    .with_limit(Some(30));

    assert_eq!(sampling.run().unwrap(), 30);
    drop(sampling);

    let through_channel: Vec<Sample> = rx.into_iter().collect();
    assert_eq!(through_channel, recorder.received());
    assert_eq!(through_channel.len(), 30);
}

#[test]
fn reports_follow_sample_order() {
    let config = SimConfig {
        samples: Some(40),
        seed: Some(3),
        ..SimConfig::default()
    };
    let (reports, sink) = collector();

    let ingested = run_simulation(&config, SimulatedPacer::starting_at(START), sink).unwrap();
    assert_eq!(ingested, 40);

    let reports = reports.lock().unwrap();
    let timestamps: Vec<i64> = reports.iter().map(|r| r.timestamp).collect();
    let expected: Vec<i64> = (0..40).map(|i| START + 5 * i).collect();
    assert_eq!(timestamps, expected);

    for report in reports.iter() {
        assert!(report.min <= report.q1 && report.q1 <= report.median);
        assert!(report.median <= report.q3 && report.q3 <= report.max);
        assert!(report.stddev >= 0.0);
    }
}

#[test]
fn same_seed_same_reports() {
    let config = SimConfig {
        samples: Some(25),
        seed: Some(42),
        max_step: 4.0,
        ..SimConfig::default()
    };

    let (first, sink) = collector();
    run_simulation(&config, SimulatedPacer::starting_at(START), sink).unwrap();
    let (second, sink) = collector();
    run_simulation(&config, SimulatedPacer::starting_at(START), sink).unwrap();

    assert_eq!(*first.lock().unwrap(), *second.lock().unwrap());
}

#[test]
fn replayed_samples_match_direct_ingest() {
    let (tx, rx) = mpsc::channel();
    let recorder = RecordingObserver::new();

    let mut publisher = SensorPublisher::new("temperature");
    publisher.register_observer(recorder.clone());
    publisher.register_observer(ChannelObserver::new(tx));

    SamplingLoop::new(
        RandomWalkSensor::new(30.0, 5.0, Some(9)),
        publisher,
        SimulatedPacer::starting_at(START),
        5,
    )
    .with_limit(Some(20))
    .run()
    .unwrap();

    let mut via_channel = Vec::new();
    consume(Monitor::<12>::default(), rx, |report| via_channel.push(*report)).unwrap();

    let mut direct: Monitor = Monitor::default();
    let expected: Vec<StatisticsReport> = recorder
        .received()
        .into_iter()
        .map(|sample| direct.ingest(sample).unwrap())
        .collect();

    assert_eq!(via_channel, expected);
}

#[test]
fn flat_sensor_never_alerts() {
    let config = SimConfig {
        samples: Some(15),
        initial_temp: 22.0,
        max_step: 0.0,
        ..SimConfig::default()
    };
    let (reports, sink) = collector();

    run_simulation(&config, SimulatedPacer::starting_at(START), sink).unwrap();

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 15);
    assert!(reports.iter().all(|r| !r.has_alert() && r.mean == 22.0 && r.stddev == 0.0));
}

#[test]
fn hot_sensor_breaches_threshold() {
    let config = SimConfig {
        monitor: MonitorConfig::default().with_breach_threshold(30.0),
        samples: Some(5),
        initial_temp: 35.0,
        max_step: 0.5,
        seed: Some(1),
        ..SimConfig::default()
    };
    let (reports, sink) = collector();

    run_simulation(&config, SimulatedPacer::starting_at(START), sink).unwrap();

    assert!(reports.lock().unwrap().iter().all(|r| r.breaches_threshold));
}

#[test]
fn invalid_config_is_rejected_before_running() {
    let config = SimConfig {
        interval_secs: 0,
        samples: Some(1),
        ..SimConfig::default()
    };
    let (reports, sink) = collector();

    let result = run_simulation(&config, SimulatedPacer::starting_at(START), sink);

    assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    assert!(reports.lock().unwrap().is_empty());
}
