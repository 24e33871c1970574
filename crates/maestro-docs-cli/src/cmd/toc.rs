use crate::output::print_json;
use anyhow::Result;
use maestro_docs_core::guide;
use maestro_docs_core::render::text;

pub fn run(json: bool) -> Result<()> {
    let doc = guide::document();
    if json {
        return print_json(&doc.toc());
    }
    print!("{}", text::render_toc(&doc));
    Ok(())
}
