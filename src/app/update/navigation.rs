use super::super::state::App;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_next_spread(&mut self) {
        let before = self.navigator.current_page();
        self.navigator.advance();
        self.log_move("next", before);
    }

    pub(super) fn handle_previous_spread(&mut self) {
        let before = self.navigator.current_page();
        self.navigator.retreat();
        self.log_move("previous", before);
    }

    pub(super) fn handle_jump_to_end(&mut self) {
        let before = self.navigator.current_page();
        self.navigator.jump_to_end();
        self.log_move("end", before);
    }

    pub(super) fn handle_jump_to_start(&mut self) {
        let before = self.navigator.current_page();
        self.navigator.jump_to_start();
        self.log_move("start", before);
    }

    fn log_move(&self, command: &str, before: usize) {
        let page = self.navigator.current_page();
        if page == before {
            debug!(command, page, "Navigation clamped; position unchanged");
        } else {
            info!(command, from = before, to = page, "Navigated to spread");
        }
    }
}
