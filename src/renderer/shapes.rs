//! Shape generation for the ring, hub and hand

use glam::Vec2;

use super::vertex::{Vertex, colors, quadrant_color};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Quadrant};

/// Triangles per 90-degree wedge
const SECTOR_SEGMENTS: u32 = 32;
/// Triangles for the hub disc
const HUB_SEGMENTS: u32 = 64;

/// Unit direction for a game angle (degrees, sweeping clockwise from 12
/// o'clock on a Y-up plane)
#[inline]
fn sweep_dir(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.sin(), radians.cos())
}

/// Generate vertices for one filled 90-degree wedge of the ring
///
/// Wedges are drawn from the center out; the hub disc is drawn over them
/// afterwards, leaving only the annular band visible.
pub fn sector(quadrant: Quadrant, outer_radius: f32) -> Vec<Vertex> {
    let color = quadrant_color(quadrant);
    let start = quadrant.start_degrees();
    let span = QUADRANT_DEGREES;

    let mut vertices = Vec::with_capacity((SECTOR_SEGMENTS * 3) as usize);
    for i in 0..SECTOR_SEGMENTS {
        let a1 = start + span * i as f32 / SECTOR_SEGMENTS as f32;
        let a2 = start + span * (i + 1) as f32 / SECTOR_SEGMENTS as f32;
        let p1 = sweep_dir(a1) * outer_radius;
        let p2 = sweep_dir(a2) * outer_radius;

        vertices.push(Vertex::new(0.0, 0.0, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a filled circle centered on the origin
pub fn circle(radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let a1 = FULL_TURN_DEGREES * i as f32 / segments as f32;
        let a2 = FULL_TURN_DEGREES * (i + 1) as f32 / segments as f32;
        let p1 = sweep_dir(a1) * radius;
        let p2 = sweep_dir(a2) * radius;

        vertices.push(Vertex::new(0.0, 0.0, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for the hand: a rectangle from the center out along the
/// current angle, colored to match the target sector
pub fn hand(angle_degrees: f32, target: Quadrant) -> Vec<Vertex> {
    let dir = sweep_dir(angle_degrees);
    let perp = Vec2::new(dir.y, -dir.x);

    let mut vertices = Vec::with_capacity(12);
    // Thin dark outline underneath, then the colored face
    quad(
        &mut vertices,
        dir,
        perp,
        HAND_LENGTH + 2.0,
        HAND_WIDTH + 4.0,
        colors::HAND_OUTLINE,
    );
    quad(
        &mut vertices,
        dir,
        perp,
        HAND_LENGTH,
        HAND_WIDTH,
        quadrant_color(target),
    );

    vertices
}

fn quad(
    vertices: &mut Vec<Vertex>,
    dir: Vec2,
    perp: Vec2,
    length: f32,
    width: f32,
    color: [f32; 4],
) {
    let half = perp * (width / 2.0);
    let tip = dir * length;

    let base_a = half;
    let base_b = -half;
    let tip_a = tip + half;
    let tip_b = tip - half;

    vertices.push(Vertex::new(base_a.x, base_a.y, color));
    vertices.push(Vertex::new(base_b.x, base_b.y, color));
    vertices.push(Vertex::new(tip_a.x, tip_a.y, color));

    vertices.push(Vertex::new(tip_a.x, tip_a.y, color));
    vertices.push(Vertex::new(base_b.x, base_b.y, color));
    vertices.push(Vertex::new(tip_b.x, tip_b.y, color));
}

/// Build the full frame for the current state
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for quadrant in Quadrant::ALL {
        vertices.extend(sector(quadrant, RING_OUTER_RADIUS));
    }
    vertices.extend(circle(RING_INNER_RADIUS, colors::HUB, HUB_SEGMENTS));

    // No hand before the first session starts
    if state.phase != GamePhase::Idle {
        vertices.extend(hand(state.angle, state.target));
    }

    vertices
}
