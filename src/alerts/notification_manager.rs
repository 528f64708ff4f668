use crate::error::DisplayError;
use crate::events::Color;
use log::{debug, info, warn};
use std::fmt;
use std::rc::Rc;

/// Text broadcast to every stakeholder when motion is detected
pub const ALERT_MESSAGE: &str = "🚨 Motion Detected! Alert sent to stakeholders.";

/// An entity that can be notified of alerts
///
/// Identity is the shared handle: two registrations of the same `Rc` are the
/// same observer, two separately constructed observers never are.
#[cfg_attr(test, mockall::automock)]
pub trait Observer {
    /// Receive a notification and render it
    ///
    /// # Errors
    ///
    /// Returns `DisplayError` if the observer could not render the message.
    /// The caller is expected to log and ignore it.
    fn receive(&self, message: &str, color: Color) -> Result<(), DisplayError>;
}

/// Broadcast hub that owns an observer registry
#[cfg_attr(test, mockall::automock)]
pub trait DangerNotifier {
    /// Register an observer at the end of the delivery order
    fn add_observer(&mut self, observer: Rc<dyn Observer>);

    /// Unregister the first registration of `observer`, if any
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>);

    /// Deliver a message to every registered observer in registration order
    ///
    /// Returns the number of observers that rendered the message.
    fn notify_observers(&self, message: &str, color: Color) -> usize;

    /// Broadcast the fixed motion alert in the alert color
    fn notify_danger(&self) -> usize {
        self.notify_observers(ALERT_MESSAGE, Color::ALERT)
    }
}

/// Ordered observer registry
///
/// Registration order is delivery order. Duplicate registrations are kept, so
/// an observer added twice is notified twice. A failure reported by one
/// observer is logged and does not prevent delivery to the observers after it.
#[derive(Default)]
pub struct NotificationManager {
    observers: Vec<Rc<dyn Observer>>,
}

impl fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationManager")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl NotificationManager {
    /// Create a manager with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registrations, duplicates included
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl DangerNotifier for NotificationManager {
    fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
        debug!("Registered observer ({} total)", self.observers.len());
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        if let Some(index) = self
            .observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
        {
            self.observers.remove(index);
            debug!("Removed observer ({} remaining)", self.observers.len());
        }
    }

    fn notify_observers(&self, message: &str, color: Color) -> usize {
        info!(
            "Broadcasting to {} observers: {}",
            self.observers.len(),
            message
        );

        let mut delivered = 0;
        for (index, observer) in self.observers.iter().enumerate() {
            match observer.receive(message, color) {
                Ok(()) => delivered += 1,
                Err(e) => warn!("Observer #{} failed to render notification: {}", index, e),
            }
        }
        delivered
    }
}
