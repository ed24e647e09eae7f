//! Geometry primitives for shape layers.
//!
//! This module provides the plain-data types shared by every shape layer
//! ([`Vertex`], [`Bounds`]) and the closed-form vertex generators for
//! regular polygons and stars. The generators are pure: same inputs, same
//! vertices, no side effects.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// A 2D point produced by a vertex generator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The axis-aligned rectangle a layer is rendered into.
///
/// Bounds are supplied by the host per render call; layer types never
/// persist them. `rotation` and `scale` are hints the host's compositor
/// applies around the bounds — shape rendering itself always draws
/// axis-aligned into `(x, y, width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,

    /// Rotation hint in degrees, applied by the host compositor.
    #[serde(default)]
    pub rotation: f64,

    /// Scale hint, applied by the host compositor.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Bounds {
    /// Creates bounds with no rotation and unit scale.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Creates bounds spanning two points, with the first point as origin.
    ///
    /// Width and height keep the sign of `(x2 - x1, y2 - y1)`, so a segment
    /// drawn from the bounds origin to the opposite corner reproduces the
    /// original direction.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Returns the center point of the bounds.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the smaller of width and height.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ============================================================================
// Vertex Generators
// ============================================================================

/// Computes the vertices of a regular polygon.
///
/// Produces exactly `sides` vertices evenly spaced around a circle of
/// `radius` centered at `(cx, cy)`. At `rotation_degrees` 0 the first
/// vertex sits at 12 o'clock; positive rotation turns clockwise in the
/// y-down coordinate space of the canvas.
///
/// `sides` is expected to be at least 3. The generator does not clamp;
/// callers and validators own the 3–100 range.
pub fn polygon_points(
    cx: f64,
    cy: f64,
    radius: f64,
    sides: u32,
    rotation_degrees: f64,
) -> Vec<Vertex> {
    let step = TAU / sides as f64;
    let start = rotation_degrees.to_radians() - FRAC_PI_2;
    (0..sides)
        .map(|i| {
            let angle = start + i as f64 * step;
            Vertex::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Computes the vertices of a star.
///
/// Produces `2 * num_points` vertices alternating between `outer_radius`
/// (even indices, starting with the first vertex) and
/// `outer_radius * inner_ratio` (odd indices). The angular step is half the
/// polygon step since there are twice as many vertices per full turn; the
/// start-angle convention matches [`polygon_points`].
///
/// `inner_ratio` is expected in (0, 1); validation enforces 0.05–0.95.
pub fn star_points(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_ratio: f64,
    num_points: u32,
    rotation_degrees: f64,
) -> Vec<Vertex> {
    let inner_radius = outer_radius * inner_ratio;
    let step = PI / num_points as f64;
    let start = rotation_degrees.to_radians() - FRAC_PI_2;
    (0..num_points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = start + i as f64 * step;
            Vertex::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
