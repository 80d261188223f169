use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::canvas::{Canvas, Rect};
use crate::config::Config;
use crate::content::Route;
use crate::error::AppError;
use crate::graphics::FrameBuffer;
use crate::input::is_press;
use crate::pages::{draw_about, draw_contact, draw_debug, draw_nav, draw_portfolio, ResumeButtons};
use crate::rotation::normalize;
use crate::state::AppState;
use crate::terminal::{probe_size, TerminalGuard};
use crate::widget::HomeWidget;

pub struct App {
    config: Config,
    state: AppState,
    home: HomeWidget,
    canvas: Canvas,
    frame: FrameBuffer,
    nav_tabs: Vec<(Rect, Route)>,
    resume_buttons: Option<ResumeButtons>,
    contact_button: Option<Rect>,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl App {
    pub fn new(config: Config) -> Self {
        let state = AppState::new(&config);
        let home = HomeWidget::new(&config);
        App {
            config,
            state,
            home,
            canvas: Canvas::new(0, 0),
            frame: FrameBuffer::new(0, 0),
            nav_tabs: Vec::new(),
            resume_buttons: None,
            contact_button: None,
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    /// Runs until quit; the terminal is restored on every exit path
    pub fn run(mut self) -> Result<(), AppError> {
        let mut terminal = TerminalGuard::attach()?;
        self.home.set_key_releases(terminal.key_releases());
        let (cols, rows) = probe_size();
        self.resize(cols, rows);

        let mut last_frame = Instant::now();
        while self.state.running {
            let deadline = last_frame + self.config.frame_interval;
            // Drain input in arrival order until the next frame is due
            loop {
                let timeout = deadline.saturating_duration_since(Instant::now());
                if !event::poll(timeout)? {
                    break;
                }
                self.handle_event(event::read()?, Instant::now());
                if !self.state.running || Instant::now() >= deadline {
                    break;
                }
            }

            let now = Instant::now();
            self.update(now.saturating_duration_since(last_frame), now);
            last_frame = now;
            self.paint();
            terminal.present(&self.canvas)?;
        }
        log::info!("quitting");
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("resize to {cols}x{rows}");
        let (cols, rows) = (usize::from(cols), usize::from(rows));
        self.canvas.resize(cols, rows);
        self.frame.resize(cols, rows * 2);
        self.home.resize(cols, rows);
    }

    fn navigate(&mut self, route: Route) {
        if route == self.state.route {
            return;
        }
        if self.state.route == Route::Home {
            self.home.release_input();
        }
        log::info!("navigate {:?} -> {:?}", self.state.route, route);
        self.state.route = route;
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(&key, now),
            Event::Mouse(mouse) => self.handle_mouse(&mouse),
            Event::Resize(cols, rows) => self.resize(cols, rows),
            Event::FocusLost => self.home.release_input(),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        let pressed = key.kind == KeyEventKind::Press;
        if pressed {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.running = false;
                    return;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state.running = false;
                    return;
                }
                KeyCode::Char(digit @ '1'..='4') => {
                    let index = digit as usize - '1' as usize;
                    self.navigate(Route::ALL[index]);
                    return;
                }
                KeyCode::Tab => {
                    self.navigate(self.state.route.next());
                    return;
                }
                KeyCode::Char('w') | KeyCode::Char('W') => {
                    self.state.wireframe = !self.state.wireframe;
                    return;
                }
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    self.state.debug = !self.state.debug;
                    return;
                }
                _ => {}
            }
        }

        match self.state.route {
            Route::Home => {
                if let Some(route) = self.home.handle_key(key, now) {
                    self.navigate(route);
                }
            }
            Route::About if is_press(key) => match key.code {
                KeyCode::Left | KeyCode::Char('b') => {
                    let _ = self.state.resume.previous();
                }
                KeyCode::Right | KeyCode::Char('n') => {
                    let _ = self.state.resume.next();
                }
                _ => {}
            },
            Route::Portfolio if is_press(key) => match key.code {
                KeyCode::Up => self.state.portfolio_scroll = self.state.portfolio_scroll.saturating_sub(1),
                KeyCode::Down => self.state.portfolio_scroll += 1,
                KeyCode::PageUp => self.state.portfolio_scroll = self.state.portfolio_scroll.saturating_sub(10),
                KeyCode::PageDown => self.state.portfolio_scroll += 10,
                KeyCode::Enter => self.navigate(Route::Contact),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let (col, row) = (usize::from(mouse.column), usize::from(mouse.row));
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let tab = self
                .nav_tabs
                .iter()
                .find(|(rect, _)| rect.contains(col, row))
                .map(|&(_, route)| route);
            if let Some(route) = tab {
                self.navigate(route);
                return;
            }
        }

        match self.state.route {
            Route::Home => {
                if let Some(route) = self.home.handle_mouse(mouse) {
                    self.navigate(route);
                }
            }
            Route::About => {
                let Some(buttons) = self.resume_buttons else {
                    return;
                };
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return;
                }
                if buttons.previous.contains(col, row) {
                    let _ = self.state.resume.previous();
                } else if buttons.next.contains(col, row) {
                    let _ = self.state.resume.next();
                }
            }
            Route::Portfolio => match mouse.kind {
                MouseEventKind::ScrollUp => {
                    self.state.portfolio_scroll = self.state.portfolio_scroll.saturating_sub(3)
                }
                MouseEventKind::ScrollDown => self.state.portfolio_scroll += 3,
                MouseEventKind::Down(MouseButton::Left) => {
                    if self.contact_button.is_some_and(|rect| rect.contains(col, row)) {
                        self.navigate(Route::Contact);
                    }
                }
                _ => {}
            },
            Route::Contact => {}
        }
    }

    pub fn update(&mut self, frame_delta: Duration, now: Instant) {
        // The island keeps spinning down even while another page is open
        self.home.update(frame_delta, now);
    }

    fn paint(&mut self) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        self.resume_buttons = None;
        self.contact_button = None;
        match self.state.route {
            Route::Home => self
                .home
                .paint(&mut self.canvas, &mut self.frame, self.state.wireframe),
            Route::About => self.resume_buttons = Some(draw_about(&mut self.canvas, &self.state.resume)),
            Route::Portfolio => {
                self.contact_button =
                    draw_portfolio(&mut self.canvas, &mut self.state.portfolio_scroll)
            }
            Route::Contact => draw_contact(&mut self.canvas),
        }
        self.nav_tabs = draw_nav(&mut self.canvas, self.state.route);

        if self.state.debug {
            let controller = self.home.controller();
            let stage = controller
                .stage()
                .map_or_else(|| "none".to_string(), |stage| stage.number().to_string());
            let lines = [
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                format!(
                    "Heading: {:.3} ({:.3} normalized)",
                    controller.orientation(),
                    normalize(controller.orientation())
                ),
                format!("Velocity: {:.4}", controller.velocity()),
                format!("Stage: {stage}"),
                format!("FPS: {:.2}", self.fps),
            ];
            draw_debug(&mut self.canvas, &lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(Config {
            frame_interval: Duration::from_millis(16),
            cell_width: 8.0,
            key_hold: Duration::from_millis(500),
            wireframe: false,
            debug: false,
            page: Route::Home,
        });
        app.resize(100, 30);
        app
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn digits_and_tab_switch_pages() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('3')), Instant::now());
        assert_eq!(app.state.route, Route::Portfolio);
        app.handle_event(press(KeyCode::Tab), Instant::now());
        assert_eq!(app.state.route, Route::Contact);
        app.handle_event(press(KeyCode::Tab), Instant::now());
        assert_eq!(app.state.route, Route::Home);
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = app();
        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Instant::now(),
        );
        assert!(!app.state.running);
    }

    #[test]
    fn arrows_paginate_the_resume() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('2')), Instant::now());
        app.handle_event(press(KeyCode::Left), Instant::now());
        assert_eq!(app.state.resume.page(), 1);
        app.handle_event(press(KeyCode::Right), Instant::now());
        assert_eq!(app.state.resume.page(), 2);
        app.handle_event(press(KeyCode::Right), Instant::now());
        assert_eq!(app.state.resume.page(), 2);
        // Arrows never reach the island from another page
        assert!(!app.home.controller().is_rotating());
    }

    #[test]
    fn clicking_resume_buttons_paginates() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('2')), Instant::now());
        app.paint();
        let buttons = app.resume_buttons.unwrap();

        app.handle_event(click(buttons.next.col as u16, buttons.next.row as u16), Instant::now());
        assert_eq!(app.state.resume.page(), 2);
        app.handle_event(click(buttons.next.col as u16, buttons.next.row as u16), Instant::now());
        assert_eq!(app.state.resume.page(), 2);
        app.handle_event(
            click(buttons.previous.col as u16, buttons.previous.row as u16),
            Instant::now(),
        );
        assert_eq!(app.state.resume.page(), 1);
    }

    #[test]
    fn clicking_a_nav_tab_navigates() {
        let mut app = app();
        app.paint();
        let (rect, _) = app.nav_tabs[3];
        app.handle_event(click(rect.col as u16, 0), Instant::now());
        assert_eq!(app.state.route, Route::Contact);
    }

    #[test]
    fn leaving_home_mid_drag_releases_the_island() {
        let mut app = app();
        app.handle_event(click(50, 15), Instant::now());
        assert!(app.home.controller().is_rotating());
        app.handle_event(press(KeyCode::Char('4')), Instant::now());
        assert!(!app.home.controller().is_rotating());
    }

    #[test]
    fn toggles_flip_flags() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('w')), Instant::now());
        app.handle_event(press(KeyCode::Char('d')), Instant::now());
        assert!(app.state.wireframe);
        assert!(app.state.debug);
        app.paint();
    }

    #[test]
    fn gallery_button_opens_contact() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('3')), Instant::now());
        app.state.portfolio_scroll = usize::MAX;
        app.paint();
        let rect = app.contact_button.unwrap();
        app.handle_event(click(rect.col as u16, rect.row as u16), Instant::now());
        assert_eq!(app.state.route, Route::Contact);

        app.handle_event(press(KeyCode::Char('3')), Instant::now());
        app.handle_event(press(KeyCode::Enter), Instant::now());
        assert_eq!(app.state.route, Route::Contact);
    }
}
