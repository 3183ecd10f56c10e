use super::state::{App, Spread};
use super::terminal::ScreenSurface;
use crate::pagination::{PageGeometry, PageList};
use std::io;

impl App {
    /// Draw the current spread onto the surface.
    pub fn view<S: ScreenSurface>(&self, surface: &mut S) -> io::Result<()> {
        render_spread(
            surface,
            &self.pages,
            self.navigator.spread(),
            &self.geometry,
            self.show_status,
        )
    }
}

/// Project the two pages of `spread` onto the left and right halves of the
/// surface. Missing pages leave their half blank. Every write is clipped to
/// the page width and to the surface bounds.
pub fn render_spread<S: ScreenSurface>(
    surface: &mut S,
    pages: &PageList,
    spread: Spread,
    geometry: &PageGeometry,
    show_status: bool,
) -> io::Result<()> {
    let bounds = surface.dimensions()?;
    surface.clear()?;

    for (index, col) in [(spread.left, geometry.left_col), (spread.right, geometry.right_col)] {
        let Some(page) = pages.get(index) else {
            continue;
        };
        for (offset, line) in page.lines().iter().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            let text = truncate_chars(line, geometry.columns_per_page);
            write_clipped(surface, bounds, geometry.top_row.saturating_add(offset), col, text)?;
        }
    }

    if show_status && !pages.is_empty() {
        let (rows, _) = bounds;
        let status_row = rows.saturating_sub(1);
        let text_end = usize::from(geometry.top_row) + geometry.lines_per_page;
        if usize::from(status_row) >= text_end {
            let label = status_label(pages, spread);
            write_clipped(surface, bounds, status_row, geometry.left_col, &label)?;
        }
    }

    surface.refresh()
}

fn status_label(pages: &PageList, spread: Spread) -> String {
    let total = pages.len();
    let range = if spread.right < total {
        format!("pages {}-{} of {}", spread.left + 1, spread.right + 1, total)
    } else {
        format!("page {} of {}", spread.left + 1, total)
    };
    match pages.get(spread.left) {
        Some(page) => format!("chapter {} | {range}", page.chapter() + 1),
        None => range,
    }
}

fn write_clipped<S: ScreenSurface>(
    surface: &mut S,
    (rows, cols): (u16, u16),
    row: u16,
    col: u16,
    text: &str,
) -> io::Result<()> {
    if row >= rows || col >= cols || text.is_empty() {
        return Ok(());
    }
    let room = usize::from(cols - col);
    surface.write_at(row, col, truncate_chars(text, room))
}

/// Longest prefix of `text` holding at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
