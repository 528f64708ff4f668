//! Sensor-facing entry point
//!
//! The server stands in for a network boundary between the sensor and the
//! detection engine; it forwards every token it receives unchanged.

use crate::alerts::DangerNotifier;
use crate::triggers::DetectionEngine;
use log::debug;

#[derive(Debug, Default)]
pub struct Server<N: DangerNotifier> {
    engine: DetectionEngine<N>,
}

impl<N: DangerNotifier> Server<N> {
    pub fn new(engine: DetectionEngine<N>) -> Self {
        Self { engine }
    }

    /// Hand a sensor token to the detection engine
    pub fn receive_data(&self, token: &str) {
        debug!("Server received sensor data: {:?}", token);
        self.engine.analyze_data(token);
    }

    pub fn engine(&self) -> &DetectionEngine<N> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DetectionEngine<N> {
        &mut self.engine
    }
}
