/// Vertex structure with camera-space position and screen position
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub position: [f64; 3],
    pub screen_position: [f64; 2],
}

impl Vertex {
    /// Distance in front of the camera; larger is farther
    pub fn depth(&self) -> f64 {
        -self.position[2]
    }
}
