use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::canvas::{wrap, Canvas, Rect, Style};
use crate::config::Config;
use crate::content::{InfoPanel, Route};
use crate::graphics::FrameBuffer;
use crate::input::{is_press, steer_for, KeyHold};
use crate::models::{Bird, Island, Plane, Sky};
use crate::render::Camera;
use crate::rotation::RotationController;
use crate::scene::ISLAND_REST_HEADING;
use crate::stage::Stage;

const PANEL_BLUE: [u8; 3] = [37, 99, 235];
const PANEL_WHITE: [u8; 3] = [250, 250, 252];
const PANEL_INK: [u8; 3] = [15, 23, 42];
const STATUS_BG: [u8; 3] = [15, 23, 42];
const STATUS_INK: [u8; 3] = [203, 213, 225];

/// Home page: the rotatable island scene with its stage info panel
pub struct HomeWidget {
    controller: RotationController,
    island: Island,
    sky: Sky,
    plane: Plane,
    bird: Bird,
    camera: Camera,
    key_hold: KeyHold,
    /// Terminal reports key-up, so holds never time out
    key_releases: bool,
    /// Pixel width of one terminal column
    cell_width: f64,
    /// Terminal size in cells
    size: (usize, usize),
    /// Button of the info panel currently shown
    link_button: Option<(Rect, Route)>,
}

impl HomeWidget {
    pub fn new(config: &Config) -> Self {
        HomeWidget {
            controller: RotationController::new(ISLAND_REST_HEADING),
            island: Island::new(),
            sky: Sky::default(),
            plane: Plane::new(),
            bird: Bird::default(),
            camera: Camera::default(),
            key_hold: KeyHold::new(config.key_hold),
            key_releases: false,
            cell_width: config.cell_width,
            size: (0, 0),
            link_button: None,
        }
    }

    pub fn set_key_releases(&mut self, key_releases: bool) {
        self.key_releases = key_releases;
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.size = (cols, rows);
    }

    pub fn controller(&self) -> &RotationController {
        &self.controller
    }

    /// Window width in pixels, as a browser would report it
    fn viewport_px(&self) -> f64 {
        self.size.0 as f64 * self.cell_width
    }

    /// Visible world width the pointer travel is normalized against
    fn viewport_width(&self) -> f64 {
        self.camera.viewport_width(self.size.0.max(1), (self.size.1 * 2).max(1))
    }

    fn pointer_x(&self, column: u16) -> f64 {
        f64::from(column) * self.cell_width
    }

    /// Handles a key on the home page; returns a page to navigate to
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> Option<Route> {
        if let Some(steer) = steer_for(key) {
            if key.kind == KeyEventKind::Release {
                // Either arrow coming up ends the rotation
                self.key_hold.clear();
                self.controller.key_up(steer);
            } else {
                let _ = self.key_hold.press(steer, now);
                self.controller.key_down(steer);
            }
            return None;
        }
        if key.code == KeyCode::Enter && is_press(key) {
            return self.current_link();
        }
        None
    }

    /// Handles a mouse event on the home page; returns a page to navigate to
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> Option<Route> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((rect, route)) = self.link_button {
                    if rect.contains(usize::from(mouse.column), usize::from(mouse.row)) {
                        return Some(route);
                    }
                }
                let x = self.pointer_x(mouse.column);
                self.controller.pointer_down(x);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let viewport_width = self.viewport_width();
                self.controller
                    .pointer_move(self.pointer_x(mouse.column), viewport_width);
            }
            MouseEventKind::Up(MouseButton::Left) => self.controller.pointer_up(),
            _ => {}
        }
        None
    }

    /// Drops any held pointer or key, as when the page goes away
    pub fn release_input(&mut self) {
        if let Some(steer) = self.key_hold.held() {
            self.controller.key_up(steer);
        }
        self.key_hold.clear();
        self.controller.pointer_up();
    }

    fn current_link(&self) -> Option<Route> {
        self.controller
            .stage()
            .and_then(|stage| stage.info().link)
            .map(|link| link.route)
    }

    pub fn update(&mut self, frame_delta: Duration, now: Instant) {
        if !self.key_releases {
            if let Some(steer) = self.key_hold.expire(now) {
                self.controller.key_up(steer);
            }
        }
        let _ = self.controller.tick();
        let rotating = self.controller.is_rotating();
        self.sky.update(frame_delta, rotating);
        self.plane.update(frame_delta, rotating);
        self.bird.update(frame_delta);
    }

    /// Paints the scene into `frame`, then the overlays onto `canvas`
    pub fn paint(&mut self, canvas: &mut Canvas, frame: &mut FrameBuffer, wireframe: bool) {
        frame.resize(canvas.cols, canvas.rows * 2);
        let viewport_px = self.viewport_px();

        self.sky.draw(&self.camera, frame);
        self.island.draw(
            self.controller.orientation(),
            viewport_px,
            &self.camera,
            frame,
            wireframe,
        );
        self.bird.draw(&self.camera, frame, wireframe);
        self.plane.draw(viewport_px, &self.camera, frame, wireframe);
        canvas.blit(frame);

        self.link_button = self
            .controller
            .stage()
            .and_then(|stage| draw_info_panel(canvas, stage, stage.info()));
        self.draw_status(canvas);
    }

    fn draw_status(&self, canvas: &mut Canvas) {
        if canvas.rows == 0 {
            return;
        }
        let row = canvas.rows - 1;
        canvas.fill(
            Rect {
                col: 0,
                row,
                width: canvas.cols,
                height: 1,
            },
            STATUS_BG,
        );
        let cursor = if self.controller.is_rotating() {
            "[grabbing]"
        } else {
            "[grab]"
        };
        let style = Style::fg(STATUS_INK).on(STATUS_BG);
        let end = canvas.put_str(1, row, cursor, style.bold());
        let hint = if self.current_link().is_some() {
            "  drag or use \u{2190} \u{2192} to explore, Enter to open"
        } else {
            "  drag or use \u{2190} \u{2192} to explore"
        };
        let _ = canvas.put_str(end, row, hint, style);
    }
}

/// Draws the stage's info box near the top; returns its link button
fn draw_info_panel(canvas: &mut Canvas, stage: Stage, panel: &InfoPanel) -> Option<(Rect, Route)> {
    let width = canvas.cols.saturating_sub(4).min(64);
    if width < 8 {
        return None;
    }
    let (bg, ink) = if stage == Stage::Greeting {
        (PANEL_BLUE, PANEL_WHITE)
    } else {
        (PANEL_WHITE, PANEL_INK)
    };

    let mut lines = Vec::new();
    for text in panel.lines {
        lines.extend(wrap(text, width - 4));
    }
    let height = lines.len() + 2 + usize::from(panel.link.is_some()) * 2;
    let col = (canvas.cols - width) / 2;
    let top = 2;
    canvas.fill(
        Rect {
            col,
            row: top,
            width,
            height,
        },
        bg,
    );

    for (i, line) in lines.iter().enumerate() {
        let offset = (width - line.chars().count()) / 2;
        let style = Style::fg(ink).on(bg);
        let style = if i == 0 { style.bold() } else { style };
        let _ = canvas.put_str(col + offset, top + 1 + i, line, style);
    }

    panel.link.map(|link| {
        let label = format!("[ {} \u{2192} ]", link.label);
        let label_width = label.chars().count().min(width);
        let row = top + lines.len() + 2;
        let button_col = col + (width - label_width) / 2;
        let end = canvas.put_str(
            button_col,
            row,
            &label,
            Style::fg(PANEL_WHITE).on(PANEL_BLUE).bold(),
        );
        (
            Rect {
                col: button_col,
                row,
                width: end - button_col,
                height: 1,
            },
            link.route,
        )
    })
}
