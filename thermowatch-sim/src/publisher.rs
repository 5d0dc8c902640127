//! Sensor publisher and its observers
//!
//! The publisher pushes every reading to its observers in registration order.
//! The monitor sits behind a [`ChannelObserver`], so the sampling thread never
//! waits on evaluation and samples reach the monitor in the order they were
//! published.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

use thermowatch_core::Sample;

use crate::error::{SimError, SimResult};

/// Receives every published sample
pub trait Observer {
    /// Called once per sample, in publication order
    fn notify(&mut self, sample: &Sample) -> SimResult<()>;
}

/// Named source fanning samples out to observers
pub struct SensorPublisher {
    name: String,
    observers: Vec<Box<dyn Observer + Send>>,
}

impl SensorPublisher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an observer after the ones already registered
    pub fn register_observer<O>(&mut self, observer: O)
    where
        O: Observer + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Notify every observer of `sample`
    ///
    /// Stops at the first observer that fails; later observers do not see
    /// the sample.
    pub fn publish(&mut self, sample: Sample) -> SimResult<()> {
        log::trace!("{} published {:.2} at t={}", self.name, sample.value, sample.timestamp);

        for observer in &mut self.observers {
            observer.notify(&sample)?;
        }

        Ok(())
    }
}

/// Forwards samples into a channel
pub struct ChannelObserver {
    tx: Sender<Sample>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<Sample>) -> Self {
        Self { tx }
    }
}

impl Observer for ChannelObserver {
    fn notify(&mut self, sample: &Sample) -> SimResult<()> {
        self.tx.send(*sample).map_err(|_| SimError::ChannelClosed)
    }
}

/// Keeps every sample it sees; clones share the same record
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    received: Arc<Mutex<Vec<Sample>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples received so far, in order
    pub fn received(&self) -> Vec<Sample> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Observer for RecordingObserver {
    fn notify(&mut self, sample: &Sample) -> SimResult<()> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*sample);
        Ok(())
    }
}
