//! Transient status messages
//!
//! Shown in the bottom-right corner for a few seconds after an action such
//! as copying a link or failing to launch the browser.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
