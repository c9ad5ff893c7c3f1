//! foco-haptic - Haptic feedback for foco
//!
//! A terminal has no vibration motor, so a "haptic pulse" is whatever the
//! platform offers: `termux-vibrate` on Android, a desktop notification, the
//! terminal bell, or nothing at all. Every pulse is fire-and-forget; callers
//! go through [`pulse`], which never fails.

mod backend;

pub use backend::{Backend, BackendKind};

use thiserror::Error;

/// Pulse length when the countdown reaches zero
pub const EXPIRY_PULSE_MS: u32 = 500;

/// Pulse length confirming a mood registration
pub const CONFIRM_PULSE_MS: u32 = 50;

/// Haptic errors
#[derive(Error, Debug)]
pub enum HapticError {
    #[error("Unknown haptic backend: {0}")]
    UnknownBackend(String),

    #[error("The command backend needs a [haptic] command")]
    MissingCommand,

    #[error("Haptic command is empty")]
    EmptyCommand,

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can buzz for a number of milliseconds
pub trait Haptic {
    /// Start a pulse of `ms` milliseconds. Must not block for the pulse length.
    fn vibrate(&self, ms: u32) -> Result<(), HapticError>;

    /// Short name for logs and `foco config`
    fn name(&self) -> &'static str;
}

/// Fire a pulse and discard any failure.
///
/// A missing vibrator or a broken command must never reach the caller.
pub fn pulse(haptic: &dyn Haptic, ms: u32) {
    match haptic.vibrate(ms) {
        Ok(()) => tracing::trace!(backend = haptic.name(), ms, "haptic pulse"),
        Err(e) => tracing::debug!(backend = haptic.name(), ms, error = %e, "haptic pulse failed"),
    }
}
