use nalgebra::Vector3;

use crate::{
    grid::Grid,
    mesh::{NormalGrid, VertexGrid},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Neighbor {
    /// `(x - 1, z)`
    Left,
    /// `(x + 1, z)`
    Right,
    /// `(x, z - 1)`
    Up,
    /// `(x, z + 1)`
    Down,
}

/// The triangle fan around a grid point, one `(B, C)` pair per quadrant.
/// `cross(B - A, C - A)` points towards +Y for every pair.
pub(crate) const QUADRANTS: [(Neighbor, Neighbor); 4] = [
    (Neighbor::Down, Neighbor::Right),
    (Neighbor::Right, Neighbor::Up),
    (Neighbor::Up, Neighbor::Left),
    (Neighbor::Left, Neighbor::Down),
];

/// Per-point unit normals: the renormalised sum of the unit normals of every
/// quadrant triangle whose two neighbours exist. That is one triangle at a
/// corner, two along an edge and four in the interior.
pub fn estimate_normals(vertices: &VertexGrid) -> NormalGrid {
    Grid::from_fn(vertices.size(), |x, z| vertex_normal(vertices, x, z))
}

fn vertex_normal(vertices: &VertexGrid, x: usize, z: usize) -> Vector3<f64> {
    let a = vertices[(x, z)];
    contributing_quadrants(vertices.dim(), x, z)
        .filter_map(|(b, c)| {
            let b = vertices[neighbor_point(x, z, b)];
            let c = vertices[neighbor_point(x, z, c)];
            triangle_normal(&a, &b, &c)
        })
        .fold(Vector3::zeros(), |sum, n| sum + n)
        .try_normalize(0.0)
        // only reachable when every slope is vertical at f64 resolution
        .unwrap_or_else(Vector3::y)
}

/// Unit normal of `cross(b - a, c - a)`, or `None` when the triangle is
/// degenerate. Edges and the product are rescaled to a max-abs component of
/// one first, so heights near the f64 limit neither overflow nor underflow.
fn triangle_normal(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> Option<Vector3<f64>> {
    let ab = rescaled(b - a);
    let ac = rescaled(c - a);
    rescaled(ab.cross(&ac)).try_normalize(0.0)
}

fn rescaled(v: Vector3<f64>) -> Vector3<f64> {
    let max = v.amax();
    if max > 0.0 {
        v / max
    } else {
        v
    }
}

pub(crate) fn contributing_quadrants(
    dim: usize,
    x: usize,
    z: usize,
) -> impl Iterator<Item = (Neighbor, Neighbor)> {
    let exists = move |n: Neighbor| match n {
        Neighbor::Left => x > 0,
        Neighbor::Right => x + 1 < dim,
        Neighbor::Up => z > 0,
        Neighbor::Down => z + 1 < dim,
    };
    QUADRANTS
        .into_iter()
        .filter(move |&(b, c)| exists(b) && exists(c))
}

fn neighbor_point(x: usize, z: usize, n: Neighbor) -> (usize, usize) {
    match n {
        Neighbor::Left => (x - 1, z),
        Neighbor::Right => (x + 1, z),
        Neighbor::Up => (x, z - 1),
        Neighbor::Down => (x, z + 1),
    }
}
