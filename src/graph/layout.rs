// src/graph/layout.rs
//! Force-directed node placement.
//!
//! ## References
//!
//! - Fruchterman & Reingold (1991) "Graph drawing by force-directed placement"

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use super::weighted::WeightedGraph;
use crate::config::LayoutConfig;
use crate::types::Term;

/// Minimum distance used in force calculations, avoids division blow-up.
const MIN_DISTANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Coordinates for every node of the graph the layout was computed from.
pub type Layout = BTreeMap<Term, Point>;

/// Strategy for assigning 2D coordinates to graph nodes.
pub trait ForceLayout: Send + Sync {
    fn layout(&self, graph: &WeightedGraph) -> Layout;
}

/// Seeded Fruchterman–Reingold spring embedding.
///
/// Nodes repel with `k²/d` and edges attract with `d²/k`. Each step is
/// capped by a temperature that cools linearly to zero over the iteration
/// budget. The result is centred on the origin and scaled into `[-1, 1]`.
/// The same seed and graph always produce the same layout.
#[derive(Debug, Clone, Default)]
pub struct SpringLayout {
    config: LayoutConfig,
}

impl SpringLayout {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    fn spacing(&self, n: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let auto = 1.0 / (n as f64).sqrt();
        self.config.spring_constant.unwrap_or(auto)
    }

    fn springs(&self, graph: &WeightedGraph, index: &BTreeMap<&str, usize>) -> Vec<(usize, usize, f64)> {
        graph
            .edges()
            .filter_map(|(u, v, w)| {
                let strength = if self.config.weighted { w } else { 1.0 };
                Some((*index.get(u)?, *index.get(v)?, strength))
            })
            .collect()
    }
}

impl ForceLayout for SpringLayout {
    #[allow(clippy::cast_precision_loss)]
    fn layout(&self, graph: &WeightedGraph) -> Layout {
        let terms: Vec<&str> = graph.nodes().collect();
        let n = terms.len();
        match n {
            0 => return Layout::new(),
            1 => return terms.iter().map(|t| (t.to_string(), Point::default())).collect(),
            _ => {}
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut pos: Vec<[f64; 2]> = (0..n).map(|_| [rng.gen::<f64>(), rng.gen::<f64>()]).collect();

        let index: BTreeMap<&str, usize> = terms.iter().enumerate().map(|(i, t)| (*t, i)).collect();
        let springs = self.springs(graph, &index);
        let k = self.spacing(n);

        let mut temperature = extent(&pos) * 0.1;
        let cooling = temperature / (self.config.iterations as f64 + 1.0);
        let mut steps_run = 0;

        for _ in 0..self.config.iterations {
            let disp = displacement(&pos, &springs, k);
            let mut moved = 0.0;
            for (p, d) in pos.iter_mut().zip(&disp) {
                let length = norm(d[0], d[1]).max(MIN_DISTANCE);
                let step = [d[0] * temperature / length, d[1] * temperature / length];
                p[0] += step[0];
                p[1] += step[1];
                moved += norm(step[0], step[1]);
            }
            temperature -= cooling;
            steps_run += 1;
            if moved / (n as f64) < self.config.threshold {
                break;
            }
        }

        rescale(&mut pos);
        debug!(nodes = n, edges = springs.len(), steps = steps_run, k, "spring layout done");

        terms
            .into_iter()
            .zip(pos)
            .map(|(t, p)| (t.to_string(), Point::new(p[0], p[1])))
            .collect()
    }
}

fn displacement(pos: &[[f64; 2]], springs: &[(usize, usize, f64)], k: f64) -> Vec<[f64; 2]> {
    let mut disp = vec![[0.0, 0.0]; pos.len()];
    let k_squared = k * k;

    for i in 0..pos.len() {
        for j in (i + 1)..pos.len() {
            let dx = pos[i][0] - pos[j][0];
            let dy = pos[i][1] - pos[j][1];
            let dist = norm(dx, dy).max(MIN_DISTANCE);
            let force = k_squared / dist;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[i][0] += fx;
            disp[i][1] += fy;
            disp[j][0] -= fx;
            disp[j][1] -= fy;
        }
    }

    for &(i, j, strength) in springs {
        let dx = pos[i][0] - pos[j][0];
        let dy = pos[i][1] - pos[j][1];
        let dist = norm(dx, dy).max(MIN_DISTANCE);
        let force = strength * dist * dist / k;
        let (fx, fy) = (dx / dist * force, dy / dist * force);
        disp[i][0] -= fx;
        disp[i][1] -= fy;
        disp[j][0] += fx;
        disp[j][1] += fy;
    }

    disp
}

fn extent(pos: &[[f64; 2]]) -> f64 {
    (0..2)
        .map(|axis| {
            let lo = pos.iter().map(|p| p[axis]).fold(f64::INFINITY, f64::min);
            let hi = pos.iter().map(|p| p[axis]).fold(f64::NEG_INFINITY, f64::max);
            hi - lo
        })
        .fold(0.0, f64::max)
}

/// Centres on the mean and scales so the largest absolute coordinate is 1.
#[allow(clippy::cast_precision_loss)]
fn rescale(pos: &mut [[f64; 2]]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p[0]).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p[1]).sum::<f64>() / n;
    for p in pos.iter_mut() {
        p[0] -= cx;
        p[1] -= cy;
    }
    let lim = pos
        .iter()
        .flat_map(|p| [p[0].abs(), p[1].abs()])
        .fold(0.0, f64::max);
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p[0] /= lim;
            p[1] /= lim;
        }
    }
}

fn norm(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}
