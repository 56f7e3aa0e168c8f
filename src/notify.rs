//! User-facing outcome notifications
//!
//! The concrete surface (modal, toast, terminal line) is a presentation
//! concern; the controller only knows this trait.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

pub trait Notifier: Send {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Notifier that writes through the `log` facade.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Error => log::error!("{}", message),
        }
    }
}
