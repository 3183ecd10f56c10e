//! Pagination utilities.
//!
//! Layout happens once, before the reader loop starts: every chapter is
//! flattened into wrapped lines, the lines are cut into fixed-height pages and
//! a blank filler page closes each chapter. The result is a flat,
//! index-addressed [`PageList`] that navigation and rendering only ever read.

mod geometry;
mod wrap;

pub use geometry::PageGeometry;
pub use wrap::flatten;

use crate::epub_loader::Document;
use tracing::debug;

/// Whether a page carries chapter text or separates two chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Content { chapter: usize },
    Filler { chapter: usize },
}

/// A fixed-height block of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
    kind: PageKind,
}

impl Page {
    fn content(mut lines: Vec<String>, lines_per_page: usize, chapter: usize) -> Self {
        assert!(
            lines.len() <= lines_per_page,
            "content page built from {} lines, limit is {lines_per_page}",
            lines.len()
        );
        lines.resize(lines_per_page, String::new());
        Page {
            lines,
            kind: PageKind::Content { chapter },
        }
    }

    fn filler(lines_per_page: usize, columns: usize, chapter: usize) -> Self {
        Page {
            lines: vec![" ".repeat(columns); lines_per_page],
            kind: PageKind::Filler { chapter },
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Zero-based chapter this page belongs to.
    pub fn chapter(&self) -> usize {
        match self.kind() {
            PageKind::Content { chapter } | PageKind::Filler { chapter } => chapter,
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self.kind, PageKind::Filler { .. })
    }
}

/// Every page of the document in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageList {
    pages: Vec<Page>,
    lines_per_page: usize,
    columns: usize,
}

impl PageList {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn push(&mut self, page: Page) {
        assert_eq!(
            page.lines.len(),
            self.lines_per_page,
            "page height must match the page list"
        );
        self.pages.push(page);
    }
}

/// Lay out the whole document into pages of `lines_per_page` lines, each line
/// wrapped to `columns` characters.
///
/// Zero dimensions are treated as one so every page still holds a line.
pub fn paginate(document: &Document, lines_per_page: usize, columns: usize) -> PageList {
    let lines_per_page = lines_per_page.max(1);
    let columns = columns.max(1);
    let mut list = PageList {
        pages: Vec::new(),
        lines_per_page,
        columns,
    };

    for (chapter_idx, chapter) in document.chapters().iter().enumerate() {
        let lines = flatten(chapter.text(), columns);
        let before = list.len();
        for chunk in lines.chunks(lines_per_page) {
            list.push(Page::content(chunk.to_vec(), lines_per_page, chapter_idx));
        }
        list.push(Page::filler(lines_per_page, columns, chapter_idx));
        debug!(
            chapter = chapter_idx,
            id = %chapter.id(),
            lines = lines.len(),
            pages = list.len() - before,
            "Paginated chapter"
        );
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epub_loader::{Chapter, Document};

    fn document(texts: &[&str]) -> Document {
        Document::new(
            texts
                .iter()
                .enumerate()
                .map(|(idx, text)| Chapter::new(format!("ch{idx}"), text.to_string()))
                .collect(),
        )
    }

    fn page_text(page: &Page) -> Vec<&str> {
        page.lines().iter().map(String::as_str).collect()
    }

    #[test]
    fn splits_and_pads_chapter_then_appends_filler() {
        let pages = paginate(&document(&["hello world foo\n\nbar baz"]), 3, 10);
        assert_eq!(pages.len(), 3);
        assert_eq!(page_text(pages.get(0).unwrap()), ["hello", "world foo", ""]);
        assert_eq!(page_text(pages.get(1).unwrap()), ["bar baz", "", ""]);
        let filler = pages.get(2).unwrap();
        assert!(filler.is_filler());
        assert_eq!(page_text(filler), ["          "; 3]);
    }

    #[test]
    fn every_page_has_exact_height() {
        let text = "one two three four five six seven eight nine ten\n\n\
                    eleven twelve\nthirteen\n\nfourteen fifteen sixteen";
        let doc = document(&[text, "", "short", text]);
        for height in 1..6 {
            for width in 1..12 {
                let pages = paginate(&doc, height, width);
                assert!(pages.iter().all(|page| page.lines().len() == height));
            }
        }
    }

    #[test]
    fn one_filler_closes_each_chapter() {
        let doc = document(&["alpha beta gamma delta", "", "epsilon\n\nzeta eta theta"]);
        let pages = paginate(&doc, 2, 8);
        let fillers: Vec<usize> = pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.is_filler())
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(fillers.len(), 3);

        for (chapter, &idx) in fillers.iter().enumerate() {
            assert_eq!(pages.get(idx).unwrap().kind(), PageKind::Filler { chapter });
            if idx > 0 {
                let previous = pages.get(idx - 1).unwrap();
                // Back-to-back fillers only happen around an empty chapter.
                if previous.is_filler() {
                    assert_eq!(chapter, 1);
                    assert_eq!(previous.kind(), PageKind::Filler { chapter: 0 });
                } else {
                    assert_eq!(previous.kind(), PageKind::Content { chapter });
                }
            }
        }
    }

    #[test]
    fn empty_chapter_yields_only_filler() {
        let pages = paginate(&document(&["\n\n\n"]), 4, 5);
        assert_eq!(pages.len(), 1);
        assert!(pages.get(0).unwrap().is_filler());
    }

    #[test]
    fn pagination_is_deterministic() {
        let doc = document(&["a b c d e f g h i j k", "l m\n\nn o p"]);
        assert_eq!(paginate(&doc, 2, 3), paginate(&doc, 2, 3));
    }

    #[test]
    fn zero_dimensions_clamp_to_one() {
        let pages = paginate(&document(&["a b"]), 0, 0);
        assert_eq!(pages.lines_per_page(), 1);
        assert_eq!(pages.columns(), 1);
        assert_eq!(pages.len(), 3);
    }

    #[test]
    fn two_single_page_chapters_interleave_with_fillers() {
        let pages = paginate(&document(&["first", "second"]), 3, 10);
        let kinds: Vec<PageKind> = pages.iter().map(Page::kind).collect();
        assert_eq!(
            kinds,
            [
                PageKind::Content { chapter: 0 },
                PageKind::Filler { chapter: 0 },
                PageKind::Content { chapter: 1 },
                PageKind::Filler { chapter: 1 },
            ]
        );
    }
}
