use anyhow::Result;
use maestro_docs_core::render::html;
use maestro_docs_core::{guide, io};
use std::path::Path;

/// Render the standalone HTML page to stdout or atomically to a file.
pub fn run(output: Option<&Path>) -> Result<()> {
    let page = html::render_page(&guide::document());
    match output {
        Some(path) => {
            io::atomic_write(path, page.as_bytes())?;
            println!("Wrote {}", path.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}
