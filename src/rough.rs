//! Hand-drawn style renderables.
//!
//! Each straight edge is replaced by a jittered cubic bezier, sampled into a
//! polyline, and optionally drawn twice with different jitter. The generator
//! is seeded so the same shape always wobbles the same way.

use egui::{Pos2, Vec2, pos2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Samples per bezier edge.
const BEZIER_SEGMENTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoughOptions {
    pub roughness: f32,
    pub bowing: f32,
    pub max_randomness_offset: f32,
    pub disable_multi_stroke: bool,
    pub seed: u64,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: 2.0,
            disable_multi_stroke: false,
            seed: 1,
        }
    }
}

/// A renderable produced by [`RoughGenerator`]: a set of polylines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawable {
    pub strokes: Vec<Vec<Pos2>>,
}

impl Drawable {
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

pub struct RoughGenerator {
    rng: StdRng,
}

impl RoughGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator for a specific element, so redraws keep the same jitter.
    pub fn for_element(id: usize, options: &RoughOptions) -> Self {
        Self::new(options.seed.wrapping_add(id as u64))
    }

    pub fn line(&mut self, start: Pos2, end: Pos2, options: &RoughOptions) -> Drawable {
        let mut strokes = vec![self.rough_line(start, end, options)];
        if !options.disable_multi_stroke {
            strokes.push(self.rough_line(start, end, options));
        }
        Drawable { strokes }
    }

    /// Rectangle from its origin corner and a (possibly negative) size.
    pub fn rectangle(&mut self, origin: Pos2, size: Vec2, options: &RoughOptions) -> Drawable {
        let corners = [
            origin,
            pos2(origin.x + size.x, origin.y),
            pos2(origin.x + size.x, origin.y + size.y),
            pos2(origin.x, origin.y + size.y),
        ];

        let mut strokes = Vec::with_capacity(8);
        for i in 0..4 {
            let start = corners[i];
            let end = corners[(i + 1) % 4];
            strokes.push(self.rough_line(start, end, options));
            if !options.disable_multi_stroke {
                strokes.push(self.rough_line(start, end, options));
            }
        }
        Drawable { strokes }
    }

    fn random(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn offset(&mut self, min: f32, max: f32, options: &RoughOptions, roughness_gain: f32) -> f32 {
        options.roughness * roughness_gain * ((self.random() * (max - min)) + min)
    }

    fn offset_opt(&mut self, x: f32, options: &RoughOptions, roughness_gain: f32) -> f32 {
        self.offset(-x, x, options, roughness_gain)
    }

    fn rough_line(&mut self, start: Pos2, end: Pos2, options: &RoughOptions) -> Vec<Pos2> {
        let length_sq = (start - end).length_sq();
        let length = length_sq.sqrt();

        // Long lines get proportionally less jitter
        let roughness_gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            (-0.0016668) * length + 1.233334
        };

        let mut offset = options.max_randomness_offset;
        if offset * offset * 100.0 > length_sq {
            offset = length / 10.0;
        }

        let diverge_point = 0.2 + self.random() * 0.2;
        let mid_disp_x = options.bowing * options.max_randomness_offset * (end.y - start.y) / 200.0;
        let mid_disp_y = options.bowing * options.max_randomness_offset * (start.x - end.x) / 200.0;
        let mid_disp_x = mid_disp_x + self.offset_opt(mid_disp_x, options, roughness_gain);
        let mid_disp_y = mid_disp_y + self.offset_opt(mid_disp_y, options, roughness_gain);

        let p0 = pos2(
            start.x + self.offset_opt(offset, options, roughness_gain),
            start.y + self.offset_opt(offset, options, roughness_gain),
        );
        let cp1 = pos2(
            mid_disp_x + start.x + (end.x - start.x) * diverge_point + self.offset_opt(offset, options, roughness_gain),
            mid_disp_y + start.y + (end.y - start.y) * diverge_point + self.offset_opt(offset, options, roughness_gain),
        );
        let cp2 = pos2(
            mid_disp_x + start.x + 2.0 * (end.x - start.x) * diverge_point + self.offset_opt(offset, options, roughness_gain),
            mid_disp_y + start.y + 2.0 * (end.y - start.y) * diverge_point + self.offset_opt(offset, options, roughness_gain),
        );
        let p3 = pos2(
            end.x + self.offset_opt(offset, options, roughness_gain),
            end.y + self.offset_opt(offset, options, roughness_gain),
        );

        let mut points = Vec::with_capacity(BEZIER_SEGMENTS as usize + 1);
        points.push(p0);
        points.extend(bezier_curve(p0, cp1, cp2, p3, BEZIER_SEGMENTS));
        points
    }
}

fn bezier_curve(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, segments: u32) -> impl Iterator<Item = Pos2> {
    (1..=segments).map(move |i| {
        let t = i as f32 / segments as f32;
        let u = 1.0 - t;
        let (uu, tt) = (u * u, t * t);
        let (uuu, ttt) = (uu * u, tt * t);
        pos2(
            uuu * p0.x + 3.0 * uu * t * p1.x + 3.0 * u * tt * p2.x + ttt * p3.x,
            uuu * p0.y + 3.0 * uu * t * p1.y + 3.0 * u * tt * p2.y + ttt * p3.y,
        )
    })
}
