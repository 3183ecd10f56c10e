use crate::config::AppConfig;

/// Page size and screen placement derived from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub lines_per_page: usize,
    pub columns_per_page: usize,
    pub top_row: u16,
    pub left_col: u16,
    pub right_col: u16,
}

impl PageGeometry {
    /// Split a `rows` x `cols` surface into two side-by-side pages.
    pub fn from_dimensions(rows: u16, cols: u16, config: &AppConfig) -> Self {
        let lines_per_page = rows.saturating_sub(config.reserved_rows).max(1);
        let columns_per_page = (cols / 2).saturating_sub(config.page_padding).max(1);
        PageGeometry {
            lines_per_page: usize::from(lines_per_page),
            columns_per_page: usize::from(columns_per_page),
            top_row: config.margin_top,
            left_col: config.margin_left,
            right_col: columns_per_page
                .saturating_add(config.margin_left)
                .saturating_add(config.gutter),
        }
    }
}
