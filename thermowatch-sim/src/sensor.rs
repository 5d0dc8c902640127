//! Synthetic temperature sensor
//!
//! Produces a bounded random walk: each reading moves at most `max_step` from
//! the previous one and is clamped to the sensor range. Seeding makes a run
//! reproducible, which the integration tests rely on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thermowatch_core::{Sample, Timestamp};

use crate::config::{SimConfig, MAX_STEP_C, SENSOR_MAX_C, SENSOR_MIN_C};

/// Random-walk temperature source
#[derive(Debug, Clone)]
pub struct RandomWalkSensor {
    rng: StdRng,
    current: f64,
    max_step: f64,
    min: f64,
    max: f64,
    started: bool,
}

impl RandomWalkSensor {
    /// Sensor starting at `initial`, seeded from entropy when `seed` is `None`
    ///
    /// `max_step` is capped at [`MAX_STEP_C`].
    pub fn new(initial: f64, max_step: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            current: initial.clamp(SENSOR_MIN_C, SENSOR_MAX_C),
            // f64::min drops NaN, so a NaN step also lands on the cap
            max_step: max_step.abs().min(MAX_STEP_C),
            min: SENSOR_MIN_C,
            max: SENSOR_MAX_C,
            started: false,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.initial_temp, config.max_step, config.seed)
    }

    /// Narrow the reported range
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.min = min;
        self.max = max;
        self.current = self.current.clamp(min, max);
        self
    }

    /// Next value of the walk; the first call returns the initial value
    pub fn next_value(&mut self) -> f64 {
        if !self.started {
            self.started = true;
            return self.current;
        }

        let step = if self.max_step > 0.0 {
            self.rng.gen_range(-self.max_step..=self.max_step)
        } else {
            0.0
        };
        self.current = (self.current + step).clamp(self.min, self.max);
        self.current
    }

    /// Take a reading stamped with `timestamp`
    pub fn read(&mut self, timestamp: Timestamp) -> Sample {
        Sample::new(timestamp, self.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_reading_is_initial_value() {
        let mut sensor = RandomWalkSensor::new(25.0, 2.0, Some(1));
        assert_eq!(sensor.read(1_620_095_103), Sample::new(1_620_095_103, 25.0));
    }

    #[test]
    fn steps_are_bounded() {
        let mut sensor = RandomWalkSensor::new(25.0, 1.5, Some(7));
        let mut previous = sensor.next_value();

        for _ in 0..500 {
            let value = sensor.next_value();
            assert!((value - previous).abs() <= 1.5 + 1e-12);
            assert!((SENSOR_MIN_C..=SENSOR_MAX_C).contains(&value));
            previous = value;
        }
    }

    #[test]
    fn same_seed_same_walk() {
        let mut a = RandomWalkSensor::new(20.0, 3.0, Some(99));
        let mut b = RandomWalkSensor::new(20.0, 3.0, Some(99));

        let walk_a: Vec<f64> = (0..50).map(|_| a.next_value()).collect();
        let walk_b: Vec<f64> = (0..50).map(|_| b.next_value()).collect();
        assert_eq!(walk_a, walk_b);
    }

    #[test]
    fn bounds_clamp_the_walk() {
        let mut sensor = RandomWalkSensor::new(30.0, 5.0, Some(3)).with_bounds(31.0, 29.0);

        for _ in 0..200 {
            let value = sensor.next_value();
            assert!((29.0..=31.0).contains(&value));
        }
    }

    #[test]
    fn oversized_step_is_capped() {
        for max_step in [1e308, f64::MAX, f64::INFINITY, f64::NAN] {
            let mut sensor = RandomWalkSensor::new(25.0, max_step, Some(4));
            let mut previous = sensor.next_value();

            for _ in 0..50 {
                let value = sensor.next_value();
                assert!((value - previous).abs() <= MAX_STEP_C);
                assert!((SENSOR_MIN_C..=SENSOR_MAX_C).contains(&value));
                previous = value;
            }
        }
    }

    #[test]
    fn zero_step_is_constant() {
        let mut sensor = RandomWalkSensor::new(22.0, 0.0, None);
        assert!((0..10).all(|_| sensor.next_value() == 22.0));
    }
}
