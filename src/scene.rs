//! Static scene description: primitive geometry, materials and the node
//! tables for the island group and the plane.

use std::f64::consts::TAU;

use crate::graphics::Rgb;
use crate::math::{calculate_normal, dot, sub};

/// Viewports narrower than this many pixels get the compact placements
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Upright n-sided prism centered on the origin
    Prism { sides: usize, radius: f64, height: f64 },
    /// n-sided cone with its base on y = 0; negative height points down
    Cone { sides: usize, radius: f64, height: f64 },
    Cuboid { size: [f64; 3] },
    /// Line segment drawn as a single edge
    Cable { from: [f64; 3], to: [f64; 3] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Grass,
    Rock,
    Snow,
    Timber,
    Roof,
    Pine,
    Steel,
    Cable,
    Fuselage,
    Wing,
    Propeller,
    Feather,
}

impl Material {
    pub fn color(self) -> Rgb {
        match self {
            Material::Grass => [96, 160, 72],
            Material::Rock => [112, 98, 88],
            Material::Snow => [236, 240, 246],
            Material::Timber => [150, 102, 60],
            Material::Roof => [170, 54, 48],
            Material::Pine => [38, 110, 62],
            Material::Steel => [150, 156, 166],
            Material::Cable => [40, 40, 46],
            Material::Fuselage => [222, 84, 60],
            Material::Wing => [238, 232, 220],
            Material::Propeller => [60, 60, 64],
            Material::Feather => [52, 58, 70],
        }
    }
}

/// One entry of a model's node table
#[derive(Clone, Copy, Debug)]
pub struct MeshNode {
    pub name: &'static str,
    pub geometry: Geometry,
    pub material: Material,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

const fn node(
    name: &'static str,
    geometry: Geometry,
    material: Material,
    position: [f64; 3],
) -> MeshNode {
    MeshNode {
        name,
        geometry,
        material,
        position,
        rotation: [0.0; 3],
        scale: [1.0; 3],
    }
}

const fn pine(name: &'static str, x: f64, z: f64) -> MeshNode {
    node(
        name,
        Geometry::Cone {
            sides: 6,
            radius: 38.0,
            height: 120.0,
        },
        Material::Pine,
        [x, 0.0, z],
    )
}

/// `center` is the middle of the tower, not its foot
const fn tower(name: &'static str, center: [f64; 3], height: f64) -> MeshNode {
    node(
        name,
        Geometry::Cuboid {
            size: [14.0, height, 14.0],
        },
        Material::Steel,
        center,
    )
}

const fn wire(name: &'static str, from: [f64; 3], to: [f64; 3]) -> MeshNode {
    node(name, Geometry::Cable { from, to }, Material::Cable, [0.0; 3])
}

/// Island group nodes in model units (the group is scaled down to world size)
pub static ISLAND_NODES: &[MeshNode] = &[
    node(
        "Island",
        Geometry::Prism {
            sides: 12,
            radius: 640.0,
            height: 80.0,
        },
        Material::Grass,
        [0.0, -40.0, 0.0],
    ),
    node(
        "Bedrock",
        Geometry::Cone {
            sides: 12,
            radius: 640.0,
            height: -320.0,
        },
        Material::Rock,
        [0.0, -80.0, 0.0],
    ),
    node(
        "Mountain",
        Geometry::Cone {
            sides: 9,
            radius: 340.0,
            height: 560.0,
        },
        Material::Rock,
        [-60.0, 0.0, -80.0],
    ),
    node(
        "MountainSnow",
        Geometry::Cone {
            sides: 9,
            radius: 128.0,
            height: 211.0,
        },
        Material::Snow,
        [-60.0, 349.0, -80.0],
    ),
    node(
        "SkiLodge",
        Geometry::Cuboid {
            size: [130.0, 70.0, 90.0],
        },
        Material::Timber,
        [380.0, 35.0, 200.0],
    ),
    MeshNode {
        name: "SkiLodgeRoof",
        geometry: Geometry::Cone {
            sides: 4,
            radius: 100.0,
            height: 60.0,
        },
        material: Material::Roof,
        position: [380.0, 70.0, 200.0],
        rotation: [0.0, TAU / 8.0, 0.0],
        scale: [1.0, 1.0, 0.75],
    },
    node(
        "GondolaBase",
        Geometry::Cuboid {
            size: [70.0, 50.0, 70.0],
        },
        Material::Timber,
        [240.0, 25.0, 360.0],
    ),
    tower("GondolaBaseTower", [240.0, 80.0, 360.0], 60.0),
    tower("GondolaTower1", [140.0, 130.0, 180.0], 260.0),
    tower("GondolaTower2", [40.0, 290.0, 20.0], 220.0),
    tower("GondolaTopTower", [-40.0, 425.0, -60.0], 50.0),
    node(
        "GondolaTop",
        Geometry::Cuboid {
            size: [60.0, 40.0, 60.0],
        },
        Material::Timber,
        [-40.0, 380.0, -60.0],
    ),
    wire("GondolaWire1", [233.0, 110.0, 360.0], [133.0, 260.0, 180.0]),
    wire("GondolaWire2", [247.0, 110.0, 360.0], [147.0, 260.0, 180.0]),
    wire("GondolaWire3", [133.0, 260.0, 180.0], [33.0, 400.0, 20.0]),
    wire("GondolaWire4", [147.0, 260.0, 180.0], [47.0, 400.0, 20.0]),
    wire("GondolaWire5", [33.0, 400.0, 20.0], [-47.0, 450.0, -60.0]),
    wire("GondolaWire6", [47.0, 400.0, 20.0], [-33.0, 450.0, -60.0]),
    pine("PineTree0", 480.0, -120.0),
    pine("PineTree1", 420.0, -260.0),
    pine("PineTree2", 300.0, -400.0),
    pine("PineTree3", 120.0, -520.0),
    pine("PineTree4", -240.0, 420.0),
    pine("PineTree5", -380.0, 300.0),
    pine("PineTree6", -500.0, 140.0),
    pine("PineTree7", -80.0, 520.0),
    pine("PineTree8", 520.0, 60.0),
    pine("PineTree9", -460.0, -240.0),
];

/// Plane nodes; the propeller is posed every frame by the animation
pub static PLANE_NODES: &[MeshNode] = &[
    node(
        "Fuselage",
        Geometry::Cuboid {
            size: [0.22, 0.22, 1.0],
        },
        Material::Fuselage,
        [0.0, 0.0, 0.0],
    ),
    node(
        "Wing",
        Geometry::Cuboid {
            size: [1.2, 0.04, 0.24],
        },
        Material::Wing,
        [0.0, 0.02, -0.08],
    ),
    node(
        "Tailplane",
        Geometry::Cuboid {
            size: [0.44, 0.03, 0.14],
        },
        Material::Wing,
        [0.0, 0.05, 0.42],
    ),
    node(
        "Fin",
        Geometry::Cuboid {
            size: [0.03, 0.2, 0.14],
        },
        Material::Fuselage,
        [0.0, 0.18, 0.42],
    ),
];

pub const PROPELLER_NODE: MeshNode = node(
    "Propeller",
    Geometry::Cuboid {
        size: [0.5, 0.05, 0.02],
    },
    Material::Propeller,
    [0.0, 0.0, -0.52],
);

/// Position, orientation and size of a top-level model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: [f64; 3],
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

/// Island heading when nothing has rotated it yet
pub const ISLAND_REST_HEADING: f64 = 4.7;
const ISLAND_TILT: f64 = 0.1;

/// The island's Y rotation is the controller's orientation, filled in per frame
pub fn island_placement(viewport_px: f64) -> Placement {
    let scale = if viewport_px < NARROW_VIEWPORT_PX {
        0.02
    } else {
        0.03
    };
    Placement {
        scale: [scale; 3],
        position: [0.0, -8.0, -50.0],
        rotation: [ISLAND_TILT, ISLAND_REST_HEADING, 0.0],
    }
}

pub fn plane_placement(viewport_px: f64) -> Placement {
    let (scale, position) = if viewport_px < NARROW_VIEWPORT_PX {
        (1.5, [0.0, -1.5, 0.0])
    } else {
        (3.0, [0.0, -4.0, -4.0])
    };
    Placement {
        scale: [scale; 3],
        position,
        rotation: [0.0, 20.0, 0.0],
    }
}

/// Triangle soup with outward face normals, or a list of edges
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub triangles: Vec<[usize; 3]>,
    pub edges: Vec<[usize; 2]>,
}

impl Mesh {
    fn push_triangle(&mut self, triangle: [usize; 3]) {
        let [a, b, c] = triangle;
        self.triangles.push(triangle);
        for edge in [[a, b], [b, c], [c, a]] {
            let reversed = [edge[1], edge[0]];
            if !self.edges.contains(&edge) && !self.edges.contains(&reversed) {
                self.edges.push(edge);
            }
        }
    }

    /// Rewinds triangles so normals point away from the centroid; the
    /// primitives are all convex so this is enough
    fn orient_outward(&mut self) {
        if self.vertices.is_empty() {
            return;
        }
        let count = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold([0.0; 3], |acc, v| [acc[0] + v[0], acc[1] + v[1], acc[2] + v[2]]);
        let centroid = sum.map(|s| s / count);
        for i in 0..self.triangles.len() {
            let triangle = self.triangles[i];
            let [a, b, c] = triangle.map(|v| self.vertices[v]);
            let center = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            let normal = calculate_normal(&a, &b, &c);
            if dot(&normal, &sub(&center, &centroid)) < 0.0 {
                self.triangles[i] = [triangle[0], triangle[2], triangle[1]];
            }
        }
    }
}

fn ring(sides: usize, radius: f64, y: f64) -> impl Iterator<Item = [f64; 3]> {
    (0..sides).map(move |i| {
        let angle = TAU * i as f64 / sides as f64;
        [radius * angle.cos(), y, radius * angle.sin()]
    })
}

impl Geometry {
    pub fn build(&self) -> Mesh {
        let mut mesh = Mesh::default();
        match *self {
            Geometry::Prism {
                sides,
                radius,
                height,
            } => {
                let sides = sides.max(3);
                mesh.vertices.extend(ring(sides, radius, -height / 2.0));
                mesh.vertices.extend(ring(sides, radius, height / 2.0));
                for i in 0..sides {
                    let next = (i + 1) % sides;
                    mesh.push_triangle([i, next, sides + next]);
                    mesh.push_triangle([i, sides + next, sides + i]);
                }
                for i in 1..sides - 1 {
                    mesh.push_triangle([0, i, i + 1]);
                    mesh.push_triangle([sides, sides + i, sides + i + 1]);
                }
            }
            Geometry::Cone {
                sides,
                radius,
                height,
            } => {
                let sides = sides.max(3);
                mesh.vertices.extend(ring(sides, radius, 0.0));
                mesh.vertices.push([0.0, height, 0.0]);
                let apex = sides;
                for i in 0..sides {
                    mesh.push_triangle([i, (i + 1) % sides, apex]);
                }
                for i in 1..sides - 1 {
                    mesh.push_triangle([0, i, i + 1]);
                }
            }
            Geometry::Cuboid { size } => {
                let [hx, hy, hz] = size.map(|s| s / 2.0);
                for &y in &[-hy, hy] {
                    mesh.vertices
                        .extend([[-hx, y, -hz], [hx, y, -hz], [hx, y, hz], [-hx, y, hz]]);
                }
                let quads = [
                    [0, 1, 2, 3],
                    [4, 5, 6, 7],
                    [0, 1, 5, 4],
                    [1, 2, 6, 5],
                    [2, 3, 7, 6],
                    [3, 0, 4, 7],
                ];
                for [a, b, c, d] in quads {
                    mesh.push_triangle([a, b, c]);
                    mesh.push_triangle([a, c, d]);
                }
            }
            Geometry::Cable { from, to } => {
                mesh.vertices.extend([from, to]);
                mesh.edges.push([0, 1]);
            }
        }
        mesh.orient_outward();
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_switches_at_narrow_breakpoint() {
        assert_eq!(island_placement(767.0).scale, [0.02; 3]);
        assert_eq!(island_placement(768.0).scale, [0.03; 3]);
        assert_eq!(island_placement(1200.0).position, [0.0, -8.0, -50.0]);

        let narrow = plane_placement(400.0);
        assert_eq!(narrow.scale, [1.5; 3]);
        assert_eq!(narrow.position, [0.0, -1.5, 0.0]);
        assert_eq!(plane_placement(1024.0).position, [0.0, -4.0, -4.0]);
    }

    #[test]
    fn cuboid_has_twelve_outward_triangles() {
        let mesh = Geometry::Cuboid { size: [2.0; 3] }.build();
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangles.len(), 12);
        assert_eq!(mesh.edges.len(), 18);
        for triangle in &mesh.triangles {
            let [a, b, c] = triangle.map(|i| mesh.vertices[i]);
            let normal = calculate_normal(&a, &b, &c);
            let corner = a;
            assert!(dot(&normal, &corner) > 0.0);
        }
    }

    #[test]
    fn downward_cone_points_its_apex_down() {
        let mesh = Geometry::Cone {
            sides: 6,
            radius: 1.0,
            height: -2.0,
        }
        .build();
        assert_eq!(mesh.vertices.last(), Some(&[0.0, -2.0, 0.0]));
        assert_eq!(mesh.triangles.len(), 6 + 4);
    }

    #[test]
    fn cable_is_a_single_edge() {
        let mesh = Geometry::Cable {
            from: [0.0; 3],
            to: [1.0; 3],
        }
        .build();
        assert!(mesh.triangles.is_empty());
        assert_eq!(mesh.edges, vec![[0, 1]]);
    }

    #[test]
    fn node_tables_use_unique_names() {
        let mut names: Vec<_> = ISLAND_NODES.iter().map(|n| n.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ISLAND_NODES.len());
    }
}
