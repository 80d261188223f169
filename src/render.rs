use crate::graphics::{draw_line, draw_triangle, FrameBuffer, Rgb};
use crate::math::{
    add, apply_lighting, calculate_light_intensity, calculate_normal, dot, mix,
    multiply_matrices, multiply_matrix_vector, rotation_scale, sub, Mat3, IDENTITY,
};
use crate::scene::{Mesh, MeshNode, Placement};
use crate::vertex::Vertex;

/// Direction the scene's directional light shines from
pub const LIGHT_DIRECTION: [f64; 3] = [1.0, 1.0, 1.0];

/// Perspective camera on the Z axis looking down -Z
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: [f64; 3],
    /// Vertical field of view in radians
    pub fov_y: f64,
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: [0.0, 0.0, 5.0],
            fov_y: 75f64.to_radians(),
            near: 0.1,
        }
    }
}

impl Camera {
    /// Focal length in pixels for a framebuffer of the given height
    pub fn focal_length(&self, height: usize) -> f64 {
        (height as f64 / 2.0) / (self.fov_y / 2.0).tan()
    }

    /// Width in world units of the visible plane through the origin
    pub fn viewport_width(&self, width: usize, height: usize) -> f64 {
        let distance = dot(&self.position, &self.position).sqrt();
        let visible_height = 2.0 * distance * (self.fov_y / 2.0).tan();
        visible_height * width as f64 / height.max(1) as f64
    }

    /// Projects a world-space point; `None` if it is behind the near plane
    pub fn project(&self, world: &[f64; 3], frame: &FrameBuffer) -> Option<Vertex> {
        let position = sub(world, &self.position);
        if -position[2] < self.near {
            return None;
        }
        let focal = self.focal_length(frame.height);
        let inverse_depth = 1.0 / -position[2];
        Some(Vertex {
            position,
            screen_position: [
                frame.width as f64 / 2.0 + position[0] * inverse_depth * focal,
                frame.height as f64 / 2.0 - position[1] * inverse_depth * focal,
            ],
        })
    }
}

/// Affine transform: `linear * v + translation`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub linear: Mat3,
    pub translation: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            linear: IDENTITY,
            translation: [0.0; 3],
        }
    }
}

impl Transform {
    pub fn new(position: &[f64; 3], rotation: &[f64; 3], scale: &[f64; 3]) -> Self {
        Transform {
            linear: rotation_scale(rotation, scale),
            translation: *position,
        }
    }

    pub fn from_placement(placement: &Placement) -> Self {
        Transform::new(&placement.position, &placement.rotation, &placement.scale)
    }

    pub fn from_node(node: &MeshNode) -> Self {
        Transform::new(&node.position, &node.rotation, &node.scale)
    }

    pub fn apply(&self, point: &[f64; 3]) -> [f64; 3] {
        add(&multiply_matrix_vector(&self.linear, point), &self.translation)
    }

    /// Applies `child` first, then `self`
    pub fn compose(&self, child: &Transform) -> Transform {
        Transform {
            linear: multiply_matrices(&self.linear, &child.linear),
            translation: self.apply(&child.translation),
        }
    }
}

/// Draws a mesh with flat lighting, or its edges in wireframe mode
pub fn draw_mesh(
    mesh: &Mesh,
    transform: &Transform,
    color: Rgb,
    camera: &Camera,
    frame: &mut FrameBuffer,
    wireframe: bool,
) {
    let world: Vec<[f64; 3]> = mesh.vertices.iter().map(|v| transform.apply(v)).collect();
    let projected: Vec<Option<Vertex>> = world.iter().map(|w| camera.project(w, frame)).collect();

    if wireframe || mesh.triangles.is_empty() {
        let edge_color = if mesh.triangles.is_empty() {
            color
        } else {
            mix(color, [255, 255, 255], 0.35)
        };
        for &[a, b] in &mesh.edges {
            if let (Some(v0), Some(v1)) = (&projected[a], &projected[b]) {
                draw_line(v0, v1, frame, edge_color);
            }
        }
        return;
    }

    for &[a, b, c] in &mesh.triangles {
        let (Some(v0), Some(v1), Some(v2)) = (&projected[a], &projected[b], &projected[c]) else {
            continue;
        };
        let normal = calculate_normal(&world[a], &world[b], &world[c]);
        if dot(&normal, &sub(&world[a], &camera.position)) > 0.0 {
            continue; // back face
        }
        let intensity = calculate_light_intensity(&normal, &LIGHT_DIRECTION);
        draw_triangle(v0, v1, v2, frame, apply_lighting(color, intensity));
    }
}

/// Vertical gradient behind everything else
pub fn draw_gradient(frame: &mut FrameBuffer, top: Rgb, bottom: Rgb) {
    let rows = frame.height.max(2) - 1;
    for y in 0..frame.height {
        let color = mix(top, bottom, y as f64 / rows as f64);
        for x in 0..frame.width {
            frame.set_background(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Geometry;

    #[test]
    fn origin_projects_to_frame_center() {
        let camera = Camera::default();
        let frame = FrameBuffer::new(80, 40);
        let vertex = camera.project(&[0.0, 0.0, 0.0], &frame).unwrap();
        assert_eq!(vertex.screen_position, [40.0, 20.0]);
        assert_eq!(vertex.depth(), 5.0);
        assert!(camera.project(&[0.0, 0.0, 5.0], &frame).is_none());
    }

    #[test]
    fn viewport_width_grows_with_aspect() {
        let camera = Camera::default();
        let square = camera.viewport_width(100, 100);
        let expected = 2.0 * 5.0 * (37.5f64).to_radians().tan();
        assert!((square - expected).abs() < 1e-9);
        assert!((camera.viewport_width(200, 100) - 2.0 * expected).abs() < 1e-9);
    }

    #[test]
    fn compose_applies_child_first() {
        let parent = Transform::new(&[10.0, 0.0, 0.0], &[0.0; 3], &[2.0; 3]);
        let child = Transform::new(&[1.0, 0.0, 0.0], &[0.0; 3], &[1.0; 3]);
        let combined = parent.compose(&child);
        assert_eq!(combined.apply(&[0.0; 3]), [12.0, 0.0, 0.0]);
        assert_eq!(combined.apply(&[1.0, 0.0, 0.0]), [14.0, 0.0, 0.0]);
    }

    #[test]
    fn cube_in_front_of_camera_covers_the_center() {
        let camera = Camera::default();
        let mut frame = FrameBuffer::new(40, 40);
        draw_gradient(&mut frame, [0, 0, 0], [0, 0, 0]);
        let mesh = Geometry::Cuboid { size: [2.0; 3] }.build();
        draw_mesh(&mesh, &Transform::default(), [200, 0, 0], &camera, &mut frame, false);
        assert_ne!(frame.pixel(20, 20), [0, 0, 0]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0]);
    }
}
