mod messages;
mod state;
mod terminal;
mod update;
mod view;

pub use state::App;
pub use terminal::{ScreenSurface, TerminalSurface};
pub use update::Effect;

use crate::config::AppConfig;
use crate::epub_loader::Document;
use crate::pagination::{PageGeometry, paginate};
use anyhow::{Context, Result};
use tracing::info;

/// Take over the terminal, lay the document out for its size and run the
/// reader until the user quits. The terminal is restored on every exit path.
pub fn run_app(document: &Document, config: &AppConfig) -> Result<()> {
    let mut surface = TerminalSurface::acquire().context("Failed to prepare the terminal")?;
    let result = start(&mut surface, document, config);
    surface.release();
    result
}

fn start<S: ScreenSurface>(surface: &mut S, document: &Document, config: &AppConfig) -> Result<()> {
    let (rows, cols) = surface
        .dimensions()
        .context("Failed to query terminal size")?;
    let geometry = PageGeometry::from_dimensions(rows, cols, config);
    let pages = paginate(document, geometry.lines_per_page, geometry.columns_per_page);
    info!(
        rows,
        cols,
        lines_per_page = pages.lines_per_page(),
        columns_per_page = pages.columns(),
        chapters = pages.iter().filter(|page| page.is_filler()).count(),
        pages = pages.len(),
        "Paginated document"
    );

    let mut app = App::new(pages, geometry, config);
    run_loop(&mut app, surface)
}

/// Draw, wait for one key, apply it; repeat until a quit command arrives.
pub fn run_loop<S: ScreenSurface>(app: &mut App, surface: &mut S) -> Result<()> {
    loop {
        app.view(surface).context("Failed to draw spread")?;
        let key = surface.read_key().context("Failed to read key")?;
        let Some(message) = app.message_for_key(key) else {
            continue;
        };
        if app.update(message) == Effect::Quit {
            info!(page = app.current_page(), "Quit requested");
            return Ok(());
        }
    }
}
