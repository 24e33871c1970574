//! Standalone HTML page renderer.
//!
//! Pure function of the document: no I/O, no error path, identical output on
//! every call. The stylesheet is inlined so the page works as a single file.

use crate::doc::{Block, Cell, Document, Inline, Section};

const STYLESHEET: &str = "\
:root{color-scheme:light}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;\
max-width:960px;margin:0 auto;padding:24px;color:#1f2933;line-height:1.6}\
header h1{margin:0 0 4px}\
.small{color:#616e7c;font-size:13px}\
section{margin-top:32px}\
h2{border-bottom:1px solid #e4e7eb;padding-bottom:6px}\
table{border-collapse:collapse;width:100%;margin:12px 0}\
th,td{border:1px solid #d3d9de;padding:6px 10px;text-align:left;vertical-align:top}\
th{background:#eef1f4}\
code{background:#eef1f4;padding:1px 4px;border-radius:3px;font-size:90%}\
pre.figure{background:#f8f9fa;border-radius:6px;padding:16px;overflow:auto;\
font-size:14px;line-height:1.8}\
.note{background:#fef6e6;border:1px solid #f0d9a8;border-radius:6px;padding:12px 16px;\
margin:12px 0}\
ol.toc{columns:2;column-gap:32px}\
ol.toc li{margin:2px 0}";

/// Escape text for HTML element and attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the complete standalone page: header, table of contents, and every
/// section in order with an `id`-carrying numbered heading.
pub fn render_page(doc: &Document) -> String {
    let mut out = String::with_capacity(64 * 1024);
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&doc.title)));
    out.push_str(&format!("<style>{STYLESHEET}</style>\n"));
    out.push_str("</head>\n<body>\n<header>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape(&doc.title)));
    out.push_str(&format!(
        "<div class=\"small\">{}</div>\n",
        escape(&doc.subtitle)
    ));
    out.push_str("</header>\n<main>\n");

    out.push_str("<section>\n<h2>Table of Contents</h2>\n<ol class=\"toc\">\n");
    for entry in doc.toc() {
        out.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>\n",
            escape(&entry.anchor),
            escape(&entry.label)
        ));
    }
    out.push_str("</ol>\n</section>\n");

    for (i, section) in doc.sections.iter().enumerate() {
        render_section(&mut out, i + 1, section);
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn render_section(out: &mut String, number: usize, section: &Section) {
    out.push_str("<section>\n");
    out.push_str(&format!(
        "<h2 id=\"{}\">{}) {}</h2>\n",
        escape(&section.anchor),
        number,
        escape(&section.title)
    ));
    for block in &section.blocks {
        render_block(out, block);
    }
    out.push_str("</section>\n");
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(3, 6);
            out.push_str(&format!("<h{level}>{}</h{level}>\n", escape(text)));
        }
        Block::Paragraph { inlines, small } => {
            let class = if *small { " class=\"small\"" } else { "" };
            out.push_str(&format!("<p{class}>{}</p>\n", render_inlines(inlines)));
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>\n"));
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", render_inlines(item)));
            }
            out.push_str(&format!("</{tag}>\n"));
        }
        Block::Table {
            headers,
            rows,
            footer,
        } => {
            out.push_str("<table>\n<thead>\n<tr>");
            for h in headers {
                out.push_str(&format!("<th>{}</th>", escape(h)));
            }
            out.push_str("</tr>\n</thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    render_cell(out, cell, "td");
                }
                out.push_str("</tr>\n");
            }
            if !footer.is_empty() {
                out.push_str("<tr>");
                for cell in footer {
                    render_cell(out, cell, "th");
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
        Block::Figure { title, lines } => {
            if let Some(title) = title {
                out.push_str(&format!("<h3>{}</h3>\n", escape(title)));
            }
            out.push_str("<pre class=\"figure\">");
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&escape(line));
            }
            out.push_str("</pre>\n");
        }
        Block::Note { blocks } => {
            out.push_str("<div class=\"note\">\n");
            for inner in blocks {
                render_block(out, inner);
            }
            out.push_str("</div>\n");
        }
    }
}

fn render_cell(out: &mut String, cell: &Cell, tag: &str) {
    if cell.span > 1 {
        out.push_str(&format!(
            "<{tag} colspan=\"{}\">{}</{tag}>",
            cell.span,
            render_inlines(&cell.content)
        ));
    } else {
        out.push_str(&format!("<{tag}>{}</{tag}>", render_inlines(&cell.content)));
    }
}

fn render_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text { text } => out.push_str(&escape(text)),
            Inline::Strong { text } => out.push_str(&format!("<b>{}</b>", escape(text))),
            Inline::Code { text } => out.push_str(&format!("<code>{}</code>", escape(text))),
            Inline::Link { text, href } => out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape(href),
                escape(text)
            )),
            Inline::Break => out.push_str("<br>"),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
