//! Haptic backends for different platforms

use std::io::Write;
use std::process::{Command, Stdio};

use crate::{Haptic, HapticError, EXPIRY_PULSE_MS};

/// Vibrate command shipped with Termux:API
const TERMUX_VIBRATE: &str = "termux-vibrate -f -d {ms}";

/// Backend names accepted in `[haptic] backend`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Auto,
    Command,
    NotifySend,
    Bell,
    None,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Command => "command",
            Self::NotifySend => "notify-send",
            Self::Bell => "bell",
            Self::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "command" => Some(Self::Command),
            "notify-send" | "notify" => Some(Self::NotifySend),
            "bell" => Some(Self::Bell),
            "none" | "off" => Some(Self::None),
            _ => None,
        }
    }
}

/// Available haptic backends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// External vibrate command, `{ms}` replaced by the pulse length
    Command(String),
    /// Linux notify-send, expiring after the pulse
    NotifySend,
    /// Terminal bell
    Bell,
    /// No feedback at all
    Silent,
}

impl Backend {
    /// Build a backend from the `[haptic]` config values
    pub fn from_config(backend: &str, command: Option<&str>) -> Result<Self, HapticError> {
        let kind = BackendKind::from_str(backend)
            .ok_or_else(|| HapticError::UnknownBackend(backend.to_string()))?;

        match kind {
            BackendKind::Auto => Ok(Self::detect(command)),
            BackendKind::Command => command
                .filter(|c| !c.trim().is_empty())
                .map(|c| Self::Command(c.to_string()))
                .ok_or(HapticError::MissingCommand),
            BackendKind::NotifySend => Ok(Self::NotifySend),
            BackendKind::Bell => Ok(Self::Bell),
            BackendKind::None => Ok(Self::Silent),
        }
    }

    /// Detect the best available backend for the current platform
    pub fn detect(command: Option<&str>) -> Self {
        if let Some(cmd) = command.filter(|c| !c.trim().is_empty()) {
            return Self::Command(cmd.to_string());
        }

        // Termux exports TERMUX_VERSION in every shell it spawns
        if std::env::var("TERMUX_VERSION").is_ok() && Self::command_exists("termux-vibrate") {
            return Self::Command(TERMUX_VIBRATE.to_string());
        }

        Self::Bell
    }

    /// Check if a command exists
    fn command_exists(cmd: &str) -> bool {
        Command::new("which")
            .arg(cmd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Expand a command template into argv for a pulse of `ms`
    pub fn argv(template: &str, ms: u32) -> Result<Vec<String>, HapticError> {
        let ms = ms.to_string();
        let argv: Vec<String> = template
            .split_whitespace()
            .map(|part| part.replace("{ms}", &ms))
            .collect();

        if argv.is_empty() {
            return Err(HapticError::EmptyCommand);
        }
        Ok(argv)
    }

    fn send_command(&self, template: &str, ms: u32) -> Result<(), HapticError> {
        let argv = Self::argv(template, ms)?;
        spawn_detached(&argv)
    }

    fn send_notify_send(&self, ms: u32) -> Result<(), HapticError> {
        let (urgency, body) = if ms >= EXPIRY_PULSE_MS {
            ("normal", "Time's up")
        } else {
            ("low", "Saved")
        };

        let argv = [
            "notify-send".to_string(),
            "--urgency".to_string(),
            urgency.to_string(),
            "--expire-time".to_string(),
            ms.to_string(),
            "foco".to_string(),
            body.to_string(),
        ];
        spawn_detached(&argv)
    }

    fn send_bell(&self) -> Result<(), HapticError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

impl Haptic for Backend {
    fn vibrate(&self, ms: u32) -> Result<(), HapticError> {
        match self {
            Self::Command(template) => self.send_command(template, ms),
            Self::NotifySend => self.send_notify_send(ms),
            Self::Bell => self.send_bell(),
            Self::Silent => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Command(_) => "command",
            Self::NotifySend => "notify-send",
            Self::Bell => "bell",
            Self::Silent => "none",
        }
    }
}

/// Spawn `argv` without waiting for it; a helper thread reaps the child.
fn spawn_detached(argv: &[String]) -> Result<(), HapticError> {
    let (program, args) = argv.split_first().ok_or(HapticError::EmptyCommand)?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| HapticError::Spawn {
            program: program.clone(),
            source,
        })?;

    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}
