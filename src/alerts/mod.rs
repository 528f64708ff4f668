/// Observer registry, broadcast and stakeholder roles
pub mod notification_manager;
pub mod roles;

pub use notification_manager::{
    DangerNotifier, NotificationManager, Observer, ALERT_MESSAGE,
};
pub use roles::{Parent, SecurityStaff, PARENT_LABEL, SECURITY_LABEL};
