use crate::output::print_json;
use anyhow::Result;
use maestro_docs_core::error::DocsError;
use maestro_docs_core::guide;
use maestro_docs_core::render::text;

pub fn run(anchor: &str, json: bool) -> Result<()> {
    let doc = guide::document();
    let section = doc
        .section(anchor)
        .ok_or_else(|| DocsError::SectionNotFound(anchor.to_string()))?;
    if json {
        return print_json(section);
    }
    let number = doc.section_number(anchor).unwrap_or(0);
    print!("{}", text::render_section(number, section));
    Ok(())
}
