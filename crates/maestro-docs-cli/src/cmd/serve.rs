use anyhow::Result;
use maestro_docs_core::config::Config;
use std::path::Path;

/// Serve the rendered guide. The runtime lives inside the command so the rest
/// of the CLI stays synchronous.
pub fn run(root: &Path, port: Option<u16>, no_open: bool) -> Result<()> {
    let config = Config::load(root)?;
    let port = port.unwrap_or(config.server.port);
    let open_browser = !no_open && config.server.open_browser;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("Maestro guide → http://localhost:{actual_port}");

        tokio::select! {
            res = maestro_docs_server::serve_on(listener, open_browser) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
