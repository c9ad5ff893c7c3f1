//! Standard paths used by foco

use std::path::PathBuf;

/// Standard foco paths
pub struct Paths {
    /// Data directory (~/.local/share/foco)
    pub data: PathBuf,
    /// Config directory (~/.config/foco)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let data = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("foco");

        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("foco");

        Self { data, config }
    }

    /// Default config file location
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.toml")
    }

    /// Diagnostics log written while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.data.join("foco.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_namespaced() {
        let paths = Paths::new();
        assert!(paths.data.ends_with("foco"));
        assert!(paths.config_file().ends_with("foco/config.toml"));
        assert!(paths.log_file().ends_with("foco/foco.log"));
    }
}
