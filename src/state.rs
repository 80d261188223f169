use crate::config::Config;
use crate::content::Route;
use crate::pagination::Pagination;

/// Pages in the resume viewer
pub const RESUME_PAGES: usize = 2;

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Page currently shown
    pub route: Route,
    /// Resume viewer page on the About page
    pub resume: Pagination,
    /// First visible line of the project gallery
    pub portfolio_scroll: usize,
    /// Enable debug mode
    pub debug: bool,
    /// Wireframe mode enabled
    pub wireframe: bool,
    /// Cleared to leave the main loop
    pub running: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            route: config.page,
            resume: Pagination::new(RESUME_PAGES),
            portfolio_scroll: 0,
            debug: config.debug,
            wireframe: config.wireframe,
            running: true,
        }
    }
}
