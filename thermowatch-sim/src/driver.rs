//! Periodic sampling loop and the monitor's consumer thread
//!
//! ```text
//! SamplingLoop                         consumer thread
//! ────────────                         ───────────────
//! sensor.read ─→ publisher ─→ mpsc ─→ Monitor::ingest ─→ sink(&report)
//!      ↑                                   (sole owner)
//!   pacer.wait(interval)
//! ```
//!
//! The monitor lives on exactly one thread and pulls from exactly one
//! channel, so push + evaluate is a single step and samples are processed in
//! the order the sensor produced them.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thermowatch_core::time::{FixedClock, SystemClock, TimeSource};
use thermowatch_core::{Monitor, Sample, StatisticsReport, Timestamp};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::publisher::{ChannelObserver, SensorPublisher};
use crate::sensor::RandomWalkSensor;

/// Clock plus the way the loop waits between samples
pub trait Pacer {
    /// Timestamp for the next sample
    fn now(&self) -> Timestamp;

    /// Block (or pretend to) until the next sample is due
    fn wait(&mut self, interval_secs: u32);
}

/// Real time: system clock, sleeps between samples
#[derive(Debug, Default)]
pub struct WallClockPacer {
    clock: SystemClock,
}

impl Pacer for WallClockPacer {
    fn now(&self) -> Timestamp {
        self.clock.now()
    }

    fn wait(&mut self, interval_secs: u32) {
        thread::sleep(Duration::from_secs(u64::from(interval_secs)));
    }
}

/// Simulated time: never sleeps, advances a fixed clock instead
#[derive(Debug, Clone)]
pub struct SimulatedPacer {
    clock: FixedClock,
}

impl SimulatedPacer {
    pub fn starting_at(timestamp: Timestamp) -> Self {
        Self {
            clock: FixedClock::new(timestamp),
        }
    }
}

impl Pacer for SimulatedPacer {
    fn now(&self) -> Timestamp {
        self.clock.now()
    }

    fn wait(&mut self, interval_secs: u32) {
        self.clock.advance(interval_secs);
    }
}

/// Reads the sensor every interval and publishes the sample
pub struct SamplingLoop<P> {
    sensor: RandomWalkSensor,
    publisher: SensorPublisher,
    pacer: P,
    interval_secs: u32,
    limit: Option<u64>,
}

impl<P: Pacer> SamplingLoop<P> {
    pub fn new(
        sensor: RandomWalkSensor,
        publisher: SensorPublisher,
        pacer: P,
        interval_secs: u32,
    ) -> Self {
        Self {
            sensor,
            publisher,
            pacer,
            interval_secs,
            limit: None,
        }
    }

    /// Stop after `samples` readings
    pub fn with_limit(mut self, samples: Option<u64>) -> Self {
        self.limit = samples;
        self
    }

    /// Take one reading and publish it
    pub fn tick(&mut self) -> SimResult<Sample> {
        let sample = self.sensor.read(self.pacer.now());
        self.publisher.publish(sample)?;
        Ok(sample)
    }

    /// Run until the limit is reached or an observer fails
    ///
    /// Returns the number of samples published. Without a limit this only
    /// returns on error.
    pub fn run(&mut self) -> SimResult<u64> {
        let mut published = 0u64;

        loop {
            self.tick()?;
            published += 1;

            if self.limit.is_some_and(|limit| published >= limit) {
                log::info!("sample limit reached after {published} samples");
                return Ok(published);
            }

            self.pacer.wait(self.interval_secs);
        }
    }

    /// Give back the publisher, e.g. to drop its channel senders
    pub fn into_publisher(self) -> SensorPublisher {
        self.publisher
    }
}

/// Ingest every sample from `rx` in order, handing each report to `sink`
///
/// Returns the number of samples ingested once the channel closes. The first
/// evaluation error stops the loop and is returned.
pub fn consume<const N: usize, F>(
    mut monitor: Monitor<N>,
    rx: Receiver<Sample>,
    mut sink: F,
) -> SimResult<u64>
where
    F: FnMut(&StatisticsReport),
{
    let mut ingested = 0u64;

    for sample in rx {
        let report = monitor.ingest(sample).map_err(|err| {
            log::error!("evaluation failed at t={}: {err}", sample.timestamp);
            SimError::from(err)
        })?;
        sink(&report);
        ingested += 1;
    }

    log::debug!("sample channel closed after {ingested} samples");
    Ok(ingested)
}

/// Start `consume` on its own thread
pub fn spawn_consumer<const N: usize, F>(
    monitor: Monitor<N>,
    rx: Receiver<Sample>,
    sink: F,
) -> JoinHandle<SimResult<u64>>
where
    F: FnMut(&StatisticsReport) + Send + 'static,
{
    thread::spawn(move || consume(monitor, rx, sink))
}

/// Wire sensor → publisher → channel → monitor and run to completion
///
/// Returns the number of samples the monitor ingested.
pub fn run_simulation<P, F>(config: &SimConfig, pacer: P, sink: F) -> SimResult<u64>
where
    P: Pacer,
    F: FnMut(&StatisticsReport) + Send + 'static,
{
    config.validate()?;

    let monitor: Monitor = Monitor::new(config.monitor)?;
    let (tx, rx) = mpsc::channel();
    let consumer = spawn_consumer(monitor, rx, sink);

    let mut publisher = SensorPublisher::new("temperature");
    publisher.register_observer(ChannelObserver::new(tx));

    let mut sampling = SamplingLoop::new(
        RandomWalkSensor::from_config(config),
        publisher,
        pacer,
        config.interval_secs,
    )
    .with_limit(config.samples);

    let produced = sampling.run();
    // Close the channel so the consumer drains and exits
    drop(sampling);

    let ingested = consumer.join().map_err(|_| SimError::ConsumerPanicked)??;

    match produced {
        // The consumer's own error explains a closed channel better
        Err(SimError::ChannelClosed) => Ok(ingested),
        Err(err) => Err(err),
        Ok(_) => Ok(ingested),
    }
}
