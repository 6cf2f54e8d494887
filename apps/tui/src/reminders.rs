use std::process::Command;

/// Outcome of asking the platform for notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderPermission {
    Granted,
    Denied,
    Unsupported,
}

/// Platform notification capability, kept behind a trait so the enable flow
/// is testable without a desktop session.
pub trait ReminderNotifier {
    fn request_permission(&self) -> ReminderPermission;
}

/// Desktop implementation probing for a notification daemon via
/// `notify-send`. A missing binary means the platform has no notification
/// support at all; a failing invocation is treated as denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl ReminderNotifier for DesktopNotifier {
    fn request_permission(&self) -> ReminderPermission {
        match Command::new("notify-send").arg("--version").output() {
            Ok(output) if output.status.success() => ReminderPermission::Granted,
            Ok(_) => ReminderPermission::Denied,
            Err(_) => ReminderPermission::Unsupported,
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::{ReminderNotifier, ReminderPermission};

    /// Fixed-answer notifier for tests.
    pub struct FakeNotifier(pub ReminderPermission);

    impl ReminderNotifier for FakeNotifier {
        fn request_permission(&self) -> ReminderPermission {
            self.0
        }
    }
}
