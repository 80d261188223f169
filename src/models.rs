//! Scene models and their per-frame behavior.

use std::f64::consts::TAU;
use std::time::Duration;

use crate::graphics::{FrameBuffer, Rgb};
use crate::math::mix;
use crate::render::{draw_gradient, draw_mesh, Camera, Transform};
use crate::scene::{
    island_placement, plane_placement, Material, Mesh, MeshNode, ISLAND_NODES, PLANE_NODES,
    PROPELLER_NODE,
};

const SKY_TOP: Rgb = [92, 168, 228];
const SKY_HORIZON: Rgb = [177, 225, 255];
const CLOUD: Rgb = [250, 252, 255];

/// A node table with its meshes built once up front
struct Model {
    parts: Vec<(MeshNode, Mesh)>,
}

impl Model {
    fn new(nodes: &[MeshNode]) -> Self {
        Model {
            parts: nodes.iter().map(|n| (*n, n.geometry.build())).collect(),
        }
    }

    fn draw(&self, root: &Transform, camera: &Camera, frame: &mut FrameBuffer, wireframe: bool) {
        for (node, mesh) in &self.parts {
            let transform = root.compose(&Transform::from_node(node));
            draw_mesh(mesh, &transform, node.material.color(), camera, frame, wireframe);
        }
    }
}

/// The rotatable island group
pub struct Island {
    model: Model,
}

impl Island {
    pub fn new() -> Self {
        Island {
            model: Model::new(ISLAND_NODES),
        }
    }

    pub fn draw(
        &self,
        orientation: f64,
        viewport_px: f64,
        camera: &Camera,
        frame: &mut FrameBuffer,
        wireframe: bool,
    ) {
        let mut placement = island_placement(viewport_px);
        placement.rotation[1] = orientation;
        self.model
            .draw(&Transform::from_placement(&placement), camera, frame, wireframe);
    }
}

/// Backdrop that turns slowly while the island is being rotated
#[derive(Debug, Default)]
pub struct Sky {
    rotation: f64,
}

/// (azimuth, elevation, half-width) of each cloud, radians
const CLOUDS: [(f64, f64, f64); 7] = [
    (0.0, 0.42, 0.16),
    (0.7, 0.30, 0.10),
    (1.6, 0.48, 0.20),
    (2.5, 0.36, 0.12),
    (3.3, 0.26, 0.14),
    (4.4, 0.44, 0.18),
    (5.4, 0.33, 0.11),
];

impl Sky {
    /// Radians per second while rotating
    pub const SPEED: f64 = 0.25;

    pub fn update(&mut self, frame_delta: Duration, rotating: bool) {
        if rotating {
            self.rotation += Self::SPEED * frame_delta.as_secs_f64();
        }
    }

    pub fn draw(&self, camera: &Camera, frame: &mut FrameBuffer) {
        draw_gradient(frame, SKY_TOP, SKY_HORIZON);
        let focal = camera.focal_length(frame.height);
        let (cx, cy) = (frame.width as f64 / 2.0, frame.height as f64 / 2.0);

        for &(azimuth, elevation, half_width) in &CLOUDS {
            let relative = azimuth + self.rotation;
            if relative.cos() < 0.3 {
                continue;
            }
            let x = cx + relative.tan() * focal;
            let y = cy - elevation.tan() * focal;
            let rx = half_width.tan() * focal;
            let ry = rx * 0.35;
            let (x0, x1) = ((x - rx).floor().max(0.0), (x + rx).ceil());
            let (y0, y1) = ((y - ry).floor().max(0.0), (y + ry).ceil());
            for py in y0 as usize..(y1.max(0.0) as usize).min(frame.height) {
                for px in x0 as usize..(x1.max(0.0) as usize).min(frame.width) {
                    let dx = (px as f64 + 0.5 - x) / rx;
                    let dy = (py as f64 + 0.5 - y) / ry;
                    let d = dx * dx + dy * dy;
                    if d <= 1.0 {
                        let base = frame.pixel(px, py);
                        frame.set_background(px, py, mix(CLOUD, base, d * d));
                    }
                }
            }
        }
    }
}

/// The plane in the foreground; its flight animation runs only while the
/// island is rotating and rewinds when it stops
pub struct Plane {
    model: Model,
    propeller: Mesh,
    playing: bool,
    clock: f64,
}

impl Plane {
    pub fn new() -> Self {
        Plane {
            model: Model::new(PLANE_NODES),
            propeller: PROPELLER_NODE.geometry.build(),
            playing: false,
            clock: 0.0,
        }
    }

    pub fn update(&mut self, frame_delta: Duration, rotating: bool) {
        if rotating != self.playing {
            log::debug!("plane animation {}", if rotating { "play" } else { "stop" });
            self.playing = rotating;
            self.clock = 0.0;
        }
        if self.playing {
            self.clock += frame_delta.as_secs_f64();
        }
    }

    pub fn draw(&self, viewport_px: f64, camera: &Camera, frame: &mut FrameBuffer, wireframe: bool) {
        let mut placement = plane_placement(viewport_px);
        placement.position[1] += (self.clock * 2.0).sin() * 0.05 * placement.scale[1];
        let root = Transform::from_placement(&placement);
        self.model.draw(&root, camera, frame, wireframe);

        let mut propeller = PROPELLER_NODE;
        propeller.rotation[2] = self.clock * 40.0;
        let transform = root.compose(&Transform::from_node(&propeller));
        draw_mesh(
            &self.propeller,
            &transform,
            propeller.material.color(),
            camera,
            frame,
            wireframe,
        );
    }
}

/// A bird circling above the island
#[derive(Debug, Default)]
pub struct Bird {
    clock: f64,
}

impl Bird {
    const CENTER: [f64; 3] = [0.0, 7.0, -32.0];
    const RADIUS: f64 = 14.0;
    /// Radians per second around the circle
    const ORBIT_SPEED: f64 = 0.3;

    pub fn update(&mut self, frame_delta: Duration) {
        self.clock += frame_delta.as_secs_f64();
    }

    pub fn position(&self) -> [f64; 3] {
        let angle = (self.clock * Self::ORBIT_SPEED) % TAU;
        [
            Self::CENTER[0] + angle.cos() * Self::RADIUS,
            Self::CENTER[1] + (self.clock * 0.8).sin() * 0.6,
            Self::CENTER[2] + angle.sin() * Self::RADIUS * 0.4,
        ]
    }

    fn mesh(&self) -> Mesh {
        let lift = (self.clock * 9.0).sin() * 0.35;
        Mesh {
            vertices: vec![
                [0.0, 0.0, -0.3],
                [0.0, 0.0, 0.3],
                [-1.0, lift, 0.1],
                [1.0, lift, 0.1],
            ],
            triangles: vec![[0, 1, 2], [0, 3, 1]],
            edges: vec![[0, 1], [1, 2], [2, 0], [1, 3], [3, 0]],
        }
    }

    pub fn draw(&self, camera: &Camera, frame: &mut FrameBuffer, wireframe: bool) {
        let heading = -(self.clock * Self::ORBIT_SPEED) % TAU;
        let transform = Transform::new(&self.position(), &[0.0, heading, 0.0], &[0.8; 3]);
        let mesh = self.mesh();
        let color = Material::Feather.color();
        draw_mesh(&mesh, &transform, color, camera, frame, wireframe);
        // Wings are seen edge-on half the time; keep the outline visible
        if !wireframe {
            draw_mesh(
                &Mesh {
                    triangles: Vec::new(),
                    ..mesh
                },
                &transform,
                color,
                camera,
                frame,
                true,
            );
        }
    }
}
