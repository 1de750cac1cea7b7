//! Position strategies for the node table.

use std::f64::consts::TAU;

use rand::Rng;

use crate::{Canvas, Point};

use super::NodeId;

pub(super) fn scatter<R: Rng + ?Sized>(size: usize, canvas: &Canvas, rng: &mut R) -> Vec<Point> {
    (0..size)
        .map(|_| {
            let x = rng.gen_range(0.0..canvas.width());
            let y = rng.gen_range(0.0..canvas.height());
            Point::new(x, y)
        })
        .collect()
}

/// Places nodes on a circle (single part) or along polygon sides (one side
/// per part). Consumes no randomness.
pub(super) fn aligned(parts: &[Vec<NodeId>], size: usize, canvas: &Canvas) -> Vec<Point> {
    let center = canvas.center();
    let radius = canvas.radius();
    let mut positions = vec![center; size];

    if parts.len() == 1 {
        for index in 0..size {
            let angle = index as f64 * TAU / size as f64;
            if let Some(slot) = positions.get_mut(index) {
                *slot = center.offset_polar(radius, angle);
            }
        }
        return positions;
    }

    for (part_index, members) in parts.iter().enumerate() {
        let (start, end) = side(part_index, parts.len(), center, radius);
        let count = members.len() as f64;
        for (rank, id) in members.iter().enumerate() {
            let t = (rank as f64 + 0.5) / (count + 1.0);
            if let Some(slot) = positions.get_mut(id.get()) {
                *slot = start.lerp(end, t);
            }
        }
    }
    positions
}

/// Endpoints of the polygon side assigned to `part_index`.
///
/// Two parts would share both sides of a digon, so they take opposite sides
/// of a square instead.
fn side(part_index: usize, part_count: usize, center: Point, radius: f64) -> (Point, Point) {
    let vertex = |index: usize, sides: usize| {
        center.offset_polar(radius, index as f64 * TAU / sides as f64)
    };
    if part_count == 2 {
        let first = part_index * 2;
        (vertex(first, 4), vertex(first + 1, 4))
    } else {
        (
            vertex(part_index, part_count),
            vertex((part_index + 1) % part_count, part_count),
        )
    }
}
