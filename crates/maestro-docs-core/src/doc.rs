//! Document model for the rendered guide.
//!
//! The guide is a fixed, ordered tree of sections. Section numbers are never
//! stored — they are derived from position, so the table of contents and the
//! rendered headings cannot disagree.

use crate::error::{DocsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Inline
// ---------------------------------------------------------------------------

/// A run of inline content inside a paragraph, list item, or table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Strong { text: String },
    Code { text: String },
    Link { text: String, href: String },
    Break,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Strong { text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Inline::Code { text: text.into() }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Inline::Link {
            text: text.into(),
            href: href.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A table cell. `span > 1` renders as a colspan (used by subtotal rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub content: Vec<Inline>,
    #[serde(default = "default_span", skip_serializing_if = "span_is_one")]
    pub span: u32,
}

fn default_span() -> u32 {
    1
}

fn span_is_one(span: &u32) -> bool {
    *span == 1
}

impl Cell {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, span: 1 }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Inline::text(text)])
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::new(vec![Inline::strong(text)])
    }

    pub fn spanning(self, span: u32) -> Self {
        Self { span, ..self }
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A block-level element inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A sub-heading inside a section (h3/h4 in the rendered page).
    Heading { level: u8, text: String },
    /// `small: true` renders as fine print (assumption notes, footnotes).
    Paragraph {
        inlines: Vec<Inline>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        small: bool,
    },
    List {
        ordered: bool,
        items: Vec<Vec<Inline>>,
    },
    /// `footer` rows render with header-style cells (subtotal/total rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        footer: Vec<Cell>,
    },
    /// Preformatted monospace block: flow diagrams, JSON examples, runbooks.
    Figure {
        title: Option<String>,
        lines: Vec<String>,
    },
    /// A callout box wrapping nested blocks.
    Note { blocks: Vec<Block> },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Block::Paragraph {
            inlines,
            small: false,
        }
    }

    pub fn small(inlines: Vec<Inline>) -> Self {
        Block::Paragraph {
            inlines,
            small: true,
        }
    }

    pub fn bullets(items: Vec<Vec<Inline>>) -> Self {
        Block::List {
            ordered: false,
            items,
        }
    }

    pub fn numbered(items: Vec<Vec<Inline>>) -> Self {
        Block::List {
            ordered: true,
            items,
        }
    }

    pub fn table(headers: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        Block::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
            footer: Vec::new(),
        }
    }

    pub fn table_with_footer(headers: &[&str], rows: Vec<Vec<Cell>>, footer: Vec<Cell>) -> Self {
        Block::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
            footer,
        }
    }

    pub fn figure(title: Option<&str>, lines: &[&str]) -> Self {
        Block::Figure {
            title: title.map(|t| t.to_string()),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn note(blocks: Vec<Block>) -> Self {
        Block::Note { blocks }
    }
}

// ---------------------------------------------------------------------------
// Section / Document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor the TOC links to (`#anchor`). Lowercase alphanumeric + hyphens.
    pub anchor: String,
    /// Heading text without its number.
    pub title: String,
    /// TOC label when it differs from the heading (the TOC abbreviates a few).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_label: Option<String>,
    pub blocks: Vec<Block>,
}

impl Section {
    /// The label shown in the table of contents.
    pub fn toc_label(&self) -> &str {
        self.toc_label.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocEntry {
    pub number: usize,
    pub anchor: String,
    pub label: String,
}

impl Document {
    /// Derive the table of contents. Numbering follows section order.
    pub fn toc(&self) -> Vec<TocEntry> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| TocEntry {
                number: i + 1,
                anchor: s.anchor.clone(),
                label: s.toc_label().to_string(),
            })
            .collect()
    }

    /// Look up a section by anchor.
    pub fn section(&self, anchor: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.anchor == anchor)
    }

    /// Position-derived section number (1-based), if the anchor exists.
    pub fn section_number(&self, anchor: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.anchor == anchor).map(|i| i + 1)
    }

    /// Check that every anchor is well-formed and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            validate_anchor(&section.anchor)?;
            if !seen.insert(section.anchor.as_str()) {
                return Err(DocsError::DuplicateAnchor(section.anchor.clone()));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Anchor validation
// ---------------------------------------------------------------------------

static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();

fn anchor_re() -> &'static Regex {
    ANCHOR_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_anchor(anchor: &str) -> Result<()> {
    if anchor.is_empty() || anchor.len() > 64 || !anchor_re().is_match(anchor) {
        return Err(DocsError::InvalidAnchor(anchor.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_anchors() {
        for anchor in ["executive-summary", "a", "scope-goals", "x1", "a-b-c"] {
            validate_anchor(anchor).unwrap_or_else(|_| panic!("expected valid: {anchor}"));
        }
    }

    #[test]
    fn invalid_anchors() {
        for anchor in ["", "Upper-Case", "-leading", "trailing-", "has space", "under_score"] {
            assert!(validate_anchor(anchor).is_err(), "expected invalid: {anchor}");
        }
    }

    #[test]
    fn toc_numbering_follows_section_order() {
        let doc = Document {
            title: "T".into(),
            subtitle: "S".into(),
            sections: vec![
                Section {
                    anchor: "first".into(),
                    title: "First".into(),
                    toc_label: None,
                    blocks: vec![],
                },
                Section {
                    anchor: "second".into(),
                    title: "Second (long heading)".into(),
                    toc_label: Some("Second".into()),
                    blocks: vec![],
                },
            ],
        };
        let toc = doc.toc();
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].number, 1);
        assert_eq!(toc[0].anchor, "first");
        assert_eq!(toc[1].number, 2);
        assert_eq!(toc[1].label, "Second");
        assert_eq!(doc.section_number("second"), Some(2));
        assert_eq!(doc.section_number("missing"), None);
    }

    #[test]
    fn duplicate_anchor_rejected() {
        let section = Section {
            anchor: "dup".into(),
            title: "Dup".into(),
            toc_label: None,
            blocks: vec![],
        };
        let doc = Document {
            title: "T".into(),
            subtitle: "S".into(),
            sections: vec![section.clone(), section],
        };
        assert!(matches!(doc.validate(), Err(DocsError::DuplicateAnchor(a)) if a == "dup"));
    }

    #[test]
    fn inline_json_tagged() {
        let inline = Inline::link("diagrams.net", "https://app.diagrams.net/");
        let json = serde_json::to_string(&inline).unwrap();
        assert!(json.contains("\"type\":\"link\""));
        let parsed: Inline = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inline);
    }

    #[test]
    fn cell_span_roundtrip() {
        let cell = Cell::strong("Subtotal (fixed)").spanning(2);
        let json = serde_json::to_string(&cell).unwrap();
        assert!(json.contains("\"span\":2"));
        let parsed: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cell);

        // span 1 is implied and not serialized
        let plain = serde_json::to_string(&Cell::text("EC2")).unwrap();
        assert!(!plain.contains("span"));
        let parsed: Cell = serde_json::from_str(&plain).unwrap();
        assert_eq!(parsed.span, 1);
    }

    #[test]
    fn block_json_snake_case() {
        let block = Block::figure(Some("Flow"), &["a -> b"]);
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"figure\""));
        let parsed: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, block);
    }
}
