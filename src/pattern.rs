use std::f32::consts::TAU;

use eframe::egui::{pos2, Pos2, Rect};

use crate::types::{PatternParameters, ShapeKind};

/// One primitive to fill, already placed in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeOutline {
    Circle { center: Pos2, radius: f32 },
    Polygon { points: Vec<Pos2> },
}

/// Distance from the canvas center to its farthest corner.
pub fn max_distance(rect: Rect) -> f32 {
    let half = rect.size() / 2.0;
    half.x.hypot(half.y)
}

/// Number of rings drawn for the given parameters: capped by user intent
/// (`density * complexity`) and by how many rings fit on the surface before
/// leaving it. Degenerate spacing or an empty ring short-circuits to zero.
pub fn ring_count(params: &PatternParameters, max_distance: f32) -> u32 {
    let ring_spacing = params.spacing * params.scale;
    if params.num_shapes == 0 || !ring_spacing.is_finite() || ring_spacing <= 0.0 {
        return 0;
    }

    let max_rings = (max_distance / ring_spacing).floor();
    if max_rings <= 0.0 {
        return 0;
    }

    params
        .density
        .saturating_mul(params.complexity)
        .min(max_rings as u32)
}

/// Plans one frame: concentric rings of evenly distributed shapes, each
/// displaced by deterministic jitter and spun around its own center.
/// Identical parameters and rect always yield identical outlines.
pub fn plan_frame(params: &PatternParameters, rect: Rect) -> Vec<ShapeOutline> {
    let rings = ring_count(params, max_distance(rect));
    if rings == 0 {
        return Vec::new();
    }

    let center = rect.center();
    let ring_spacing = params.spacing * params.scale;
    let mut outlines = Vec::with_capacity(rings as usize * params.num_shapes as usize);

    for ring in 1..=rings {
        let radius = ring as f32 * ring_spacing;
        for j in 0..params.num_shapes {
            let angle = j as f32 * TAU / params.num_shapes as f32;

            // Jitter looks random but is a pure function of the inputs, so a
            // frame is reproducible for identical parameter values.
            let phase = params.position + ring as f32 * 10.0 + j as f32;
            let noise_x = phase.sin() * params.noise * params.size;
            let noise_y = phase.cos() * params.noise * params.size;

            let x = center.x + (angle + params.rotation).cos() * radius + noise_x;
            let y = center.y + (angle + params.rotation).sin() * radius + noise_y;
            let spin = angle + params.rotation + params.position;

            outlines.push(shape_outline(params.shape, pos2(x, y), params.size, spin));
        }
    }

    outlines
}

fn shape_outline(kind: ShapeKind, center: Pos2, size: f32, spin: f32) -> ShapeOutline {
    let half = size / 2.0;
    match kind {
        ShapeKind::Circle => ShapeOutline::Circle {
            center,
            radius: half,
        },
        ShapeKind::Square => polygon(
            center,
            spin,
            &[
                pos2(-half, -half),
                pos2(half, -half),
                pos2(half, half),
                pos2(-half, half),
            ],
        ),
        ShapeKind::Triangle => polygon(
            center,
            spin,
            &[pos2(0.0, -half), pos2(half, half), pos2(-half, half)],
        ),
        ShapeKind::Hexagon => {
            let mut corners = [Pos2::ZERO; 6];
            for (k, corner) in corners.iter_mut().enumerate() {
                let hex_angle = k as f32 * TAU / 6.0;
                *corner = pos2(hex_angle.cos() * half, hex_angle.sin() * half);
            }
            polygon(center, spin, &corners)
        }
    }
}

fn polygon(center: Pos2, spin: f32, local: &[Pos2]) -> ShapeOutline {
    let (sin, cos) = spin.sin_cos();
    let points = local
        .iter()
        .map(|p| {
            pos2(
                center.x + p.x * cos - p.y * sin,
                center.y + p.x * sin + p.y * cos,
            )
        })
        .collect();
    ShapeOutline::Polygon { points }
}
