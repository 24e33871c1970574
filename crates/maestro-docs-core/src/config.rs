use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name, looked up at the project root.
pub const CONFIG_FILE: &str = "maestro-docs.yaml";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// LauncherConfig
// ---------------------------------------------------------------------------

/// Commands the `start` launcher runs. Defaults reproduce the stock
/// `npm install` / `npm run dev` workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
    #[serde(default = "default_install_args")]
    pub install_args: Vec<String>,
    #[serde(default = "default_dev_args")]
    pub dev_args: Vec<String>,
    /// Directory whose absence triggers the install step.
    #[serde(default = "default_deps_dir")]
    pub deps_dir: String,
}

fn default_package_manager() -> String {
    "npm".to_string()
}

fn default_install_args() -> Vec<String> {
    vec!["install".to_string()]
}

fn default_dev_args() -> Vec<String> {
    vec!["run".to_string(), "dev".to_string()]
}

fn default_deps_dir() -> String {
    "node_modules".to_string()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            install_args: default_install_args(),
            dev_args: default_dev_args(),
            deps_dir: default_deps_dir(),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port for `serve` (0 = OS-assigned).
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

fn default_port() -> u16 {
    4173
}

fn default_open_browser() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open_browser: default_open_browser(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            launcher: LauncherConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

const KNOWN_PACKAGE_MANAGERS: &[&str] = &["npm", "pnpm", "yarn", "bun"];

impl Config {
    /// Load `maestro-docs.yaml` from the project root. An absent file is not
    /// an error — the defaults describe the stock workflow.
    pub fn load(root: &Path) -> Result<Self> {
        let path = config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let pm = self.launcher.package_manager.trim();
        if pm.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "launcher.package_manager is empty".to_string(),
            });
        } else if !pm.contains('/') && !pm.contains('\\') && !KNOWN_PACKAGE_MANAGERS.contains(&pm) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "unknown package manager '{pm}' (expected one of: {})",
                    KNOWN_PACKAGE_MANAGERS.join(", ")
                ),
            });
        }

        if self.launcher.install_args.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "launcher.install_args is empty — the install step will run the \
                          package manager with no arguments"
                    .to_string(),
            });
        }

        if self.launcher.dev_args.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "launcher.dev_args is empty — the dev server step will run the \
                          package manager with no arguments"
                    .to_string(),
            });
        }

        if Path::new(&self.launcher.deps_dir).is_absolute() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "launcher.deps_dir '{}' is absolute — expected a path relative to the \
                     project root",
                    self.launcher.deps_dir
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.launcher.package_manager, "npm");
        assert_eq!(parsed.launcher.dev_args, vec!["run", "dev"]);
        assert_eq!(parsed.launcher.deps_dir, "node_modules");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "launcher:\n  package_manager: pnpm\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.launcher.package_manager, "pnpm");
        assert_eq!(cfg.launcher.deps_dir, "node_modules");
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.server.port, default_port());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "launcher: [not, a, map]\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.server.port = 0;
        cfg.launcher.package_manager = "bun".to_string();
        cfg.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn validate_default_config_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_unknown_package_manager() {
        let mut cfg = Config::default();
        cfg.launcher.package_manager = "cargo".to_string();
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Warning && w.message.contains("unknown package manager")));
    }

    #[test]
    fn validate_path_package_manager_not_flagged() {
        // Absolute or relative paths are deliberate overrides, not typos.
        let mut cfg = Config::default();
        cfg.launcher.package_manager = "/opt/tools/fakepm".to_string();
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn validate_empty_package_manager_is_error() {
        let mut cfg = Config::default();
        cfg.launcher.package_manager = String::new();
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.level == WarnLevel::Error));
    }

    #[test]
    fn validate_absolute_deps_dir_warns() {
        let mut cfg = Config::default();
        cfg.launcher.deps_dir = "/var/cache/node_modules".to_string();
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("deps_dir")));
    }

    #[test]
    fn validate_empty_args_warn() {
        let mut cfg = Config::default();
        cfg.launcher.install_args.clear();
        cfg.launcher.dev_args.clear();
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("install_args")));
        assert!(warnings.iter().any(|w| w.message.contains("dev_args")));
    }
}
