use crate::math::edge_function;
use crate::vertex::Vertex;

pub type Rgb = [u8; 3];

/// Color and depth buffers for one frame
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Rgb>,
    depth: Vec<f64>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![[0; 3]; width * height],
            depth: vec![f64::INFINITY; width * height],
        }
    }

    /// Reallocates if the size changed and resets depth
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            *self = FrameBuffer::new(width, height);
        } else {
            self.depth.fill(f64::INFINITY);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Writes a background pixel that any geometry will overwrite
    pub fn set_background(&mut self, x: usize, y: usize, color: Rgb) {
        let offset = y * self.width + x;
        self.pixels[offset] = color;
        self.depth[offset] = f64::INFINITY;
    }

    fn plot(&mut self, x: usize, y: usize, depth: f64, color: Rgb) {
        let offset = y * self.width + x;
        if depth < self.depth[offset] {
            self.depth[offset] = depth;
            self.pixels[offset] = color;
        }
    }
}

/// Draws a flat-shaded triangle with depth testing, in either winding
pub fn draw_triangle(v0: &Vertex, v1: &Vertex, v2: &Vertex, frame: &mut FrameBuffer, color: Rgb) {
    if frame.width == 0 || frame.height == 0 {
        return;
    }

    // Compute bounding box of the triangle
    let min_x = v0.screen_position[0]
        .min(v1.screen_position[0])
        .min(v2.screen_position[0])
        .floor()
        .max(0.0) as usize;
    let max_x = v0.screen_position[0]
        .max(v1.screen_position[0])
        .max(v2.screen_position[0])
        .ceil()
        .min(frame.width as f64 - 1.0);
    let min_y = v0.screen_position[1]
        .min(v1.screen_position[1])
        .min(v2.screen_position[1])
        .floor()
        .max(0.0) as usize;
    let max_y = v0.screen_position[1]
        .max(v1.screen_position[1])
        .max(v2.screen_position[1])
        .ceil()
        .min(frame.height as f64 - 1.0);
    if max_x < 0.0 || max_y < 0.0 {
        return;
    }
    let (max_x, max_y) = (max_x as usize, max_y as usize);

    let area = edge_function(&v0.screen_position, &v1.screen_position, &v2.screen_position);
    if area.abs() < f64::EPSILON {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = [x as f64 + 0.5, y as f64 + 0.5];

            // Dividing by the signed area makes both windings positive inside
            let w0 = edge_function(&v1.screen_position, &v2.screen_position, &p) / area;
            let w1 = edge_function(&v2.screen_position, &v0.screen_position, &p) / area;
            let w2 = edge_function(&v0.screen_position, &v1.screen_position, &p) / area;

            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                let depth = v0.depth() * w0 + v1.depth() * w1 + v2.depth() * w2;
                frame.plot(x, y, depth, color);
            }
        }
    }
}

/// Draws a depth-tested line using Bresenham's algorithm
pub fn draw_line(v0: &Vertex, v1: &Vertex, frame: &mut FrameBuffer, color: Rgb) {
    let (mut x0, mut y0, x1, y1) = (
        v0.screen_position[0].round() as isize,
        v0.screen_position[1].round() as isize,
        v1.screen_position[0].round() as isize,
        v1.screen_position[1].round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy
    let steps = dx.max(-dy).max(1) as f64;
    let mut step = 0.0;

    loop {
        if x0 >= 0 && x0 < frame.width as isize && y0 >= 0 && y0 < frame.height as isize {
            let t = step / steps;
            // Nudge lines in front of coplanar faces so edges stay visible
            let depth = v0.depth() * (1.0 - t) + v1.depth() * t - 0.05;
            frame.plot(x0 as usize, y0 as usize, depth, color);
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
        step += 1.0;
    }
}
