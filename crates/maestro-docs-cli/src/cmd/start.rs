use anyhow::Result;
use maestro_docs_core::config::Config;
use maestro_docs_core::error::DocsError;
use maestro_docs_core::launch;
use std::path::Path;

/// Run the install-if-needed → dev-server sequence and exit with the dev
/// server's own exit code. A failed install exits 1 without starting it.
pub fn run(root: &Path) -> Result<()> {
    let config = Config::load(root)?;
    match launch::start(root, &config.launcher) {
        Ok(code) => std::process::exit(code),
        Err(DocsError::InstallFailed(_)) => {
            eprintln!("❌ Failed to install dependencies");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
