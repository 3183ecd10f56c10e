mod reader;

pub use reader::{Navigator, Spread};

use super::update::KeyMap;
use crate::config::AppConfig;
use crate::pagination::{PageGeometry, PageList};

/// Everything the reader loop needs: the finished layout, where it sits on
/// screen, and the one piece of mutable state, the navigator.
pub struct App {
    pub(in crate::app) pages: PageList,
    pub(in crate::app) geometry: PageGeometry,
    pub(in crate::app) navigator: Navigator,
    pub(in crate::app) keymap: KeyMap,
    pub(in crate::app) show_status: bool,
}

impl App {
    pub fn new(pages: PageList, geometry: PageGeometry, config: &AppConfig) -> Self {
        let navigator = Navigator::new(pages.len(), config.end_jump);
        App {
            pages,
            geometry,
            navigator,
            keymap: KeyMap::from_bindings(&config.keys),
            show_status: config.show_status,
        }
    }

    pub fn current_page(&self) -> usize {
        self.navigator.current_page()
    }
}
