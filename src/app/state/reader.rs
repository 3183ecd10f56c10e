use crate::config::EndJumpPolicy;

/// Two facing pages; either index may be past the end of the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub left: usize,
    pub right: usize,
}

/// Current position in the page list.
///
/// Moves two pages at a time and clamps at both ends, so `current_page` stays
/// within `0..=max(0, page_count - 1)` whatever sequence of commands arrives.
#[derive(Debug, Clone)]
pub struct Navigator {
    current_page: usize,
    page_count: usize,
    end_jump: EndJumpPolicy,
}

impl Navigator {
    pub fn new(page_count: usize, end_jump: EndJumpPolicy) -> Self {
        Navigator {
            current_page: 0,
            page_count,
            end_jump,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn spread(&self) -> Spread {
        Spread {
            left: self.current_page,
            right: self.current_page + 1,
        }
    }

    pub fn advance(&mut self) {
        self.set_page_clamped(self.current_page.saturating_add(2));
    }

    pub fn retreat(&mut self) {
        self.current_page = self.current_page.saturating_sub(2);
    }

    pub fn jump_to_end(&mut self) {
        self.current_page = self.end_page();
    }

    pub fn jump_to_start(&mut self) {
        self.current_page = 0;
    }

    /// Furthest page a spread may start on under the configured policy.
    fn end_page(&self) -> usize {
        let last = self.page_count.saturating_sub(1);
        match self.end_jump {
            EndJumpPolicy::LastPage => last,
            EndJumpPolicy::EvenAligned => last - last % 2,
        }
    }

    fn set_page_clamped(&mut self, page: usize) {
        self.current_page = page.min(self.end_page());
    }
}
