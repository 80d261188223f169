use crate::graphics::Rgb;

pub type Mat3 = [[f64; 3]; 3];

pub const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Edge function used in rasterization
pub fn edge_function(a: &[f64; 2], b: &[f64; 2], c: &[f64; 2]) -> f64 {
    (c[0] - a[0]) * (b[1] - a[1]) - (c[1] - a[1]) * (b[0] - a[0])
}

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &Mat3, vector: &[f64; 3]) -> [f64; 3] {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

pub fn rotation_x(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]
}

pub fn rotation_y(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]
}

pub fn rotation_z(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]
}

/// Rotation for XYZ-ordered Euler angles (X applied last)
pub fn euler_xyz(angles: &[f64; 3]) -> Mat3 {
    multiply_matrices(
        &rotation_x(angles[0]),
        &multiply_matrices(&rotation_y(angles[1]), &rotation_z(angles[2])),
    )
}

/// Rotation combined with a per-axis scale (scale applied first)
pub fn rotation_scale(angles: &[f64; 3], scale: &[f64; 3]) -> Mat3 {
    let scale = [
        [scale[0], 0.0, 0.0],
        [0.0, scale[1], 0.0],
        [0.0, 0.0, scale[2]],
    ];
    multiply_matrices(&euler_xyz(angles), &scale)
}

pub fn add(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn normalize(v: &[f64; 3]) -> [f64; 3] {
    let length = dot(v, v).sqrt();
    if length == 0.0 {
        return [0.0; 3];
    }
    [v[0] / length, v[1] / length, v[2] / length]
}

/// Calculates the normal vector of a triangle
pub fn calculate_normal(a: &[f64; 3], b: &[f64; 3], c: &[f64; 3]) -> [f64; 3] {
    let u = sub(b, a);
    let v = sub(c, a);
    normalize(&[
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ])
}

/// Light intensity of a surface lit by a directional light
pub fn calculate_light_intensity(normal: &[f64; 3], light_dir: &[f64; 3]) -> f64 {
    let diffuse = dot(normal, &normalize(light_dir)).max(0.0);
    // Hemisphere term: faces pointing up pick up sky light
    let sky = (normal[1] * 0.5 + 0.5) * 0.25;
    (0.35 + diffuse * 0.75 + sky).min(1.3)
}

/// Applies lighting to a color
pub fn apply_lighting(color: Rgb, intensity: f64) -> Rgb {
    color.map(|channel| (f64::from(channel) * intensity).min(255.0) as u8)
}

/// Linear blend between two colors, `t` in `[0, 1]`
pub fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    [0usize, 1, 2].map(|i| (f64::from(a[i]) * (1.0 - t) + f64::from(b[i]) * t).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: &[f64; 3], b: &[f64; 3]) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-9)
    }

    #[test]
    fn quarter_turn_about_y_maps_x_to_minus_z() {
        let rotated = multiply_matrix_vector(&rotation_y(FRAC_PI_2), &[1.0, 0.0, 0.0]);
        assert!(close(&rotated, &[0.0, 0.0, -1.0]));
    }

    #[test]
    fn euler_with_zero_angles_is_identity() {
        assert_eq!(euler_xyz(&[0.0; 3]), IDENTITY);
    }

    #[test]
    fn rotation_scale_scales_before_rotating() {
        let m = rotation_scale(&[0.0, FRAC_PI_2, 0.0], &[2.0, 1.0, 1.0]);
        let v = multiply_matrix_vector(&m, &[1.0, 0.0, 0.0]);
        assert!(close(&v, &[0.0, 0.0, -2.0]));
    }

    #[test]
    fn normal_follows_winding() {
        let n = calculate_normal(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert!(close(&n, &[0.0, 0.0, 1.0]));
    }

    #[test]
    fn lit_faces_are_brighter_than_shadowed_ones() {
        let light = [1.0, 1.0, 1.0];
        let lit = calculate_light_intensity(&normalize(&[1.0, 1.0, 1.0]), &light);
        let dark = calculate_light_intensity(&normalize(&[-1.0, -1.0, -1.0]), &light);
        assert!(lit > dark);
        assert!(dark > 0.0);
        assert_eq!(apply_lighting([200, 100, 0], 2.0), [255, 200, 0]);
    }
}
