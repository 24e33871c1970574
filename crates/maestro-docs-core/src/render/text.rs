//! Plain-text renderer for the CLI (`toc` and `section` output).

use crate::doc::{Block, Document, Inline, Section};

/// Render the table of contents as an aligned three-column table.
pub fn render_toc(doc: &Document) -> String {
    let rows: Vec<Vec<String>> = doc
        .toc()
        .into_iter()
        .map(|e| vec![e.number.to_string(), e.anchor, e.label])
        .collect();
    layout_table(&["#", "ANCHOR", "TITLE"], &rows)
}

/// Render one section as plain text, with its position-derived number.
pub fn render_section(number: usize, section: &Section) -> String {
    let mut out = format!("{number}) {}\n", section.title);
    for block in &section.blocks {
        out.push('\n');
        render_block(&mut out, block, "");
    }
    out
}

fn render_block(out: &mut String, block: &Block, indent: &str) {
    match block {
        Block::Heading { text, .. } => {
            out.push_str(&format!("{indent}## {text}\n"));
        }
        Block::Paragraph { inlines, .. } => {
            out.push_str(&format!("{indent}{}\n", inline_text(inlines)));
        }
        Block::List { ordered, items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("{}.", i + 1)
                } else {
                    "-".to_string()
                };
                out.push_str(&format!("{indent}  {marker} {}\n", inline_text(item)));
            }
        }
        Block::Table {
            headers,
            rows,
            footer,
        } => {
            let header_refs: Vec<&str> = headers.iter().map(|h| h.as_str()).collect();
            let mut text_rows: Vec<Vec<String>> = rows
                .iter()
                .map(|row| row.iter().map(|c| inline_text(&c.content)).collect())
                .collect();
            if !footer.is_empty() {
                // Spanned cells occupy their own column; pad the rest.
                let mut row: Vec<String> =
                    footer.iter().map(|c| inline_text(&c.content)).collect();
                row.resize(headers.len().max(row.len()), String::new());
                text_rows.push(row);
            }
            for line in layout_table(&header_refs, &text_rows).lines() {
                out.push_str(&format!("{indent}{line}\n"));
            }
        }
        Block::Figure { title, lines } => {
            if let Some(title) = title {
                out.push_str(&format!("{indent}## {title}\n"));
            }
            for line in lines {
                out.push_str(&format!("{indent}    {line}\n"));
            }
        }
        Block::Note { blocks } => {
            for inner in blocks {
                render_block(out, inner, &format!("{indent}  | "));
            }
        }
    }
}

fn inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text { text } | Inline::Strong { text } => out.push_str(text),
            Inline::Code { text } => out.push_str(&format!("`{text}`")),
            Inline::Link { text, href } => out.push_str(&format!("{text} ({href})")),
            Inline::Break => out.push('\n'),
        }
    }
    out
}

/// Lay out an aligned-column table with a dashed separator under the header.
pub fn layout_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            } else {
                widths.push(cell.len());
            }
        }
    }

    let mut out = String::new();
    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    out.push_str(header_row.join("  ").trim_end());
    out.push('\n');

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&sep.join("  "));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
