//! The two-step start sequence: install web dependencies when the dependency
//! directory is missing, then hand off to the dev-server command.
//!
//! Both steps run synchronously with inherited stdio. The dev server owns the
//! terminal until it exits, and its exit code is the caller's exit code.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::LauncherConfig;
use crate::error::{DocsError, Result};

/// A resolved launch plan: the package-manager executable plus the commands
/// and dependency directory from config.
#[derive(Debug, Clone)]
pub struct Launcher {
    root: PathBuf,
    program: PathBuf,
    install_args: Vec<String>,
    dev_args: Vec<String>,
    deps_dir: String,
}

impl Launcher {
    /// Resolve the package manager on PATH. Fails up front with a clear error
    /// rather than at spawn time.
    pub fn from_config(root: &Path, cfg: &LauncherConfig) -> Result<Self> {
        let program = resolve_program(&cfg.package_manager)?;
        Ok(Self {
            root: root.to_path_buf(),
            program,
            install_args: cfg.install_args.clone(),
            dev_args: cfg.dev_args.clone(),
            deps_dir: cfg.deps_dir.clone(),
        })
    }

    /// The resolved package-manager executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// True when the dependency directory is absent and install must run.
    pub fn needs_install(&self) -> bool {
        !self.root.join(&self.deps_dir).exists()
    }

    /// Run the install command to completion with inherited stdio.
    pub fn install(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.install_args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| DocsError::LaunchFailed {
                command: self.display_command(&self.install_args),
                reason: e.to_string(),
            })?;
        if !status.success() {
            return Err(DocsError::InstallFailed(status.code().unwrap_or(1)));
        }
        Ok(())
    }

    /// Run the dev-server command with inherited stdio and return its exit
    /// code. Death by signal maps to 1.
    pub fn run_dev(&self) -> Result<i32> {
        let status = Command::new(&self.program)
            .args(&self.dev_args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| DocsError::LaunchFailed {
                command: self.display_command(&self.dev_args),
                reason: e.to_string(),
            })?;
        Ok(status.code().unwrap_or(1))
    }

    fn display_command(&self, args: &[String]) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }
}

/// Look up the package-manager executable with `which`. On Windows npm ships
/// as `npm.cmd`.
pub fn resolve_program(name: &str) -> Result<PathBuf> {
    let candidate = if cfg!(windows) && name == "npm" {
        "npm.cmd"
    } else {
        name
    };
    which::which(candidate).map_err(|_| DocsError::CommandNotFound(name.to_string()))
}

/// Run the full start sequence and return the dev server's exit code.
///
/// Sequencing: the install step runs only when the dependency directory is
/// missing, and the dev server does not start unless install succeeded.
pub fn start(root: &Path, cfg: &LauncherConfig) -> Result<i32> {
    let launcher = Launcher::from_config(root, cfg)?;

    println!("🚀 Starting Maestro Documentation App...\n");

    if launcher.needs_install() {
        println!("📦 Installing dependencies...");
        launcher.install()?;
    }

    println!("🔧 Starting development server...\n");
    let code = launcher.run_dev()?;
    println!("Development server exited with code {code}");
    Ok(code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Write an executable stub that logs its arguments to `calls.log` next
    /// to itself, then runs `body`.
    fn write_stub(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fakepm");
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n{body}\n"
        );
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn stub_config(stub: &Path) -> LauncherConfig {
        LauncherConfig {
            package_manager: stub.display().to_string(),
            ..LauncherConfig::default()
        }
    }

    fn calls(dir: &TempDir) -> Vec<String> {
        let log = dir.path().join("calls.log");
        if !log.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(log)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn install_runs_before_dev_when_deps_missing() {
        let dir = TempDir::new().unwrap();
        let stub = write_stub(dir.path(), "exit 0");
        let code = start(dir.path(), &stub_config(&stub)).unwrap();
        assert_eq!(code, 0);
        assert_eq!(calls(&dir), vec!["install", "run dev"]);
    }

    #[test]
    fn install_skipped_when_deps_present() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        let stub = write_stub(dir.path(), "exit 0");
        let code = start(dir.path(), &stub_config(&stub)).unwrap();
        assert_eq!(code, 0);
        assert_eq!(calls(&dir), vec!["run dev"]);
    }

    #[test]
    fn failed_install_blocks_dev_server() {
        let dir = TempDir::new().unwrap();
        let stub = write_stub(dir.path(), "if [ \"$1\" = install ]; then exit 3; fi");
        let err = start(dir.path(), &stub_config(&stub)).unwrap_err();
        assert!(matches!(err, DocsError::InstallFailed(3)));
        assert_eq!(calls(&dir), vec!["install"]);
    }

    #[test]
    fn dev_exit_code_propagates() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        let stub = write_stub(dir.path(), "if [ \"$1\" = run ]; then exit 7; fi");
        let code = start(dir.path(), &stub_config(&stub)).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn missing_package_manager_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cfg = LauncherConfig {
            package_manager: "definitely-not-a-real-pm".to_string(),
            ..LauncherConfig::default()
        };
        let err = start(dir.path(), &cfg).unwrap_err();
        assert!(matches!(err, DocsError::CommandNotFound(_)));
    }

    #[test]
    fn custom_deps_dir_respected() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".deps")).unwrap();
        let stub = write_stub(dir.path(), "exit 0");
        let cfg = LauncherConfig {
            package_manager: stub.display().to_string(),
            deps_dir: ".deps".to_string(),
            ..LauncherConfig::default()
        };
        start(dir.path(), &cfg).unwrap();
        assert_eq!(calls(&dir), vec!["run dev"]);
    }

    #[test]
    fn resolve_program_finds_sh() {
        // sh exists on every unix test machine
        assert!(resolve_program("sh").is_ok());
    }
}
