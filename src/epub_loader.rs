//! EPUB loading utilities.
//!
//! This module knows how to open an EPUB, walk through its spine and turn each
//! spine item into a plain-text [`Chapter`]. Everything downstream works on
//! the resulting [`Document`] and never touches the container again.

use anyhow::{Context, Result};
use epub::doc::EpubDoc;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info, warn};

/// Width handed to `html2text`; large enough that it never hard-wraps and
/// the pagination layer decides every line break.
const EXTRACT_WIDTH: usize = 10_000;

static RE_LINK_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]\n]*)\]\[\d+\]").unwrap());
static RE_FOOTNOTE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\[\d+\]: .*$").unwrap());
static RE_IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());

/// One spine item reduced to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    id: String,
    text: String,
}

impl Chapter {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Chapter {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// All chapters of a book in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    chapters: Vec<Chapter>,
}

impl Document {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Document { chapters }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }
}

/// Whether the path carries an `.epub` suffix (any case).
pub fn is_epub(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase()),
        Some(ext) if ext == "epub"
    )
}

/// Open an EPUB and extract the text of every spine item.
pub fn load_document(path: &Path) -> Result<Document> {
    info!(path = %path.display(), "Loading EPUB content");
    let mut doc =
        EpubDoc::new(path).with_context(|| format!("Failed to open EPUB at {}", path.display()))?;

    let mut chapters = Vec::new();
    loop {
        if let Some((markup, _mime)) = doc.get_current_str() {
            let id = doc
                .get_current_id()
                .unwrap_or_else(|| format!("spine-{}", chapters.len()));
            let text = extract_text(&markup);
            debug!(
                chapter = chapters.len(),
                %id,
                chars = text.len(),
                "Parsed chapter"
            );
            chapters.push(Chapter::new(id, text));
        }

        if !doc.go_next() {
            break;
        }
    }

    if chapters.is_empty() {
        warn!(path = %path.display(), "EPUB spine has no readable items");
        chapters.push(Chapter::new(
            "placeholder",
            "No textual content found in this EPUB.",
        ));
    }

    info!(chapters = chapters.len(), "Finished loading EPUB content");
    Ok(Document::new(chapters))
}

/// Convert one chapter's XHTML into plain text.
///
/// Paragraphs come out separated by blank lines. Images are removed from the
/// markup before conversion and link footnotes are dropped afterwards, keeping
/// only the link text. If the markup cannot be converted, it is returned
/// untouched so the chapter still shows up.
pub fn extract_text(markup: &str) -> String {
    let markup = RE_IMG_TAG.replace_all(markup, "");
    let plain = match html2text::from_read(markup.as_bytes(), EXTRACT_WIDTH) {
        Ok(clean) => clean,
        Err(err) => {
            warn!("html2text failed: {err}");
            return markup.to_string();
        }
    };
    strip_references(&plain)
}

fn strip_references(text: &str) -> String {
    let text = RE_LINK_REFERENCE.replace_all(text, "$1");
    RE_FOOTNOTE_LINE.replace_all(&text, "").into_owned()
}
