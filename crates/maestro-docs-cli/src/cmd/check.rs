use crate::output::print_json;
use anyhow::Result;
use maestro_docs_core::config::{Config, WarnLevel};
use maestro_docs_core::launch;
use std::path::Path;

/// Verify the launch environment. Findings are warnings, not failures —
/// a missing package manager only matters once `start` actually runs.
/// An unparseable config is the one hard error.
pub fn run(root: &Path, json: bool) -> Result<()> {
    let config = Config::load(root)?;
    let warnings = config.validate();

    let package_manager = launch::resolve_program(&config.launcher.package_manager).ok();
    let deps_dir_present = root.join(&config.launcher.deps_dir).exists();

    if json {
        return print_json(&serde_json::json!({
            "config_warnings": warnings,
            "package_manager": config.launcher.package_manager,
            "package_manager_path": package_manager,
            "deps_dir": config.launcher.deps_dir,
            "deps_dir_present": deps_dir_present,
        }));
    }

    for w in &warnings {
        let label = match w.level {
            WarnLevel::Warning => "warning",
            WarnLevel::Error => "error",
        };
        println!("{label}: {}", w.message);
    }

    match &package_manager {
        Some(path) => println!(
            "package manager: {} ({})",
            config.launcher.package_manager,
            path.display()
        ),
        None => println!(
            "warning: package manager '{}' not found on PATH — `maestro-docs start` will fail",
            config.launcher.package_manager
        ),
    }

    if deps_dir_present {
        println!("dependencies: {} present", config.launcher.deps_dir);
    } else {
        println!(
            "dependencies: {} missing — `maestro-docs start` will install first",
            config.launcher.deps_dir
        );
    }

    Ok(())
}
