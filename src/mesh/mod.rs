//! Neural mesh scene: a random point cloud inside the unit sphere joined by
//! nearest-neighbor edges.
//!
//! The scene is built once per animator and never mutated afterwards; each
//! frame derives transformed copies through [`transform`].

pub mod transform;

use std::f32::consts::TAU;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Base position of a node plus its wobble phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Phase offset in [0, 2π) that desynchronizes the per-node wobble
    pub phase: f32,
}

impl Point3D {
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(&self, other: &Point3D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub base: Point3D,
}

/// Undirected edge, always stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Scene {
    /// Sample `count` nodes and connect each to its `neighbors` closest peers.
    pub fn generate<R: Rng + ?Sized>(count: usize, neighbors: usize, rng: &mut R) -> Self {
        let nodes: Vec<Node> = (0..count).map(|_| Node { base: sample_point(rng) }).collect();
        let edges = nearest_neighbor_edges(&nodes, neighbors);
        log::debug!(
            "mesh scene generated: {} nodes, {} edges",
            nodes.len(),
            edges.len()
        );
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Uniform-ish sample inside the unit sphere.
///
/// Azimuth is uniform, the polar angle comes from `acos` of a uniform variate
/// in [-1, 1] and the radius is the square root of a uniform variate.
pub fn sample_point<R: Rng + ?Sized>(rng: &mut R) -> Point3D {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = rng.gen::<f32>().sqrt();
    let phase = rng.gen::<f32>() * TAU;

    Point3D {
        x: r * phi.sin() * theta.cos(),
        y: r * phi.sin() * theta.sin(),
        z: r * phi.cos(),
        phase,
    }
}

/// Edges from every node to its `k` nearest neighbors in base space.
///
/// An edge is only emitted from the lower index, so a node whose closest
/// neighbors all have smaller indices contributes no edges of its own.
pub fn nearest_neighbor_edges(nodes: &[Node], k: usize) -> Vec<Edge> {
    let lists: Vec<Vec<usize>> = {
        #[cfg(feature = "parallel")]
        {
            (0..nodes.len())
                .into_par_iter()
                .map(|i| closest(nodes, i, k))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..nodes.len()).map(|i| closest(nodes, i, k)).collect()
        }
    };

    lists
        .into_iter()
        .enumerate()
        .flat_map(|(i, near)| {
            near.into_iter()
                .filter(move |&j| i < j)
                .map(move |j| Edge { a: i, b: j })
        })
        .collect()
}

/// Indices of the `k` nodes closest to `i`, nearest first. Ties keep index order.
fn closest(nodes: &[Node], i: usize, k: usize) -> Vec<usize> {
    let origin = nodes[i].base;
    let mut others: Vec<(f32, usize)> = nodes
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, n)| (origin.distance(&n.base), j))
        .collect();
    others.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    others.into_iter().take(k).map(|(_, j)| j).collect()
}
