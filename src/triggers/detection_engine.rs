use crate::alerts::DangerNotifier;
use log::debug;

/// Sensor token that raises a danger alert, compared case-insensitively
pub const MOTION_KEYWORD: &str = "motion";

/// Whether a sensor token is a motion reading
pub fn is_motion(token: &str) -> bool {
    token.eq_ignore_ascii_case(MOTION_KEYWORD)
}

/// Engine applying the motion detection rule to incoming sensor tokens
///
/// The rule is stateless: a token that equals `MOTION_KEYWORD` ignoring ASCII
/// case triggers exactly one danger broadcast, anything else is ignored.
#[derive(Debug, Default)]
pub struct DetectionEngine<N: DangerNotifier> {
    notifier: N,
}

impl<N: DangerNotifier> DetectionEngine<N> {
    /// Create an engine that alerts through `notifier`
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Inspect a single sensor token and alert stakeholders on motion
    pub fn analyze_data(&self, token: &str) {
        if is_motion(token) {
            let delivered = self.notifier.notify_danger();
            debug!("Motion detected, alert delivered to {} observers", delivered);
        } else {
            debug!("Ignoring sensor token: {:?}", token);
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access for registering observers during setup
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
