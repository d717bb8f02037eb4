/// IntersectionHandler: binds a camera ray to a spatial index.
///
/// Two query styles:
/// - `find_intersections`: one-shot whole-index query, timed, optionally
///   compared against the index's parallel query.
/// - `start_traversal` + `traverse`: user-paced frontier walk, one tree
///   level per call, with the surviving boxes exposed as a wireframe.
///
/// Every output (points, wireframe, ray segment, diagnostic lines) is
/// rebuilt here and exposed read-only; nothing touches GPU state.

use std::sync::Arc;
use std::time::{Duration, Instant};
use glam::Vec3;
use crate::math::Ray;
use crate::tree::{Frontier, SpatialIndex};

const SOURCE: &str = "raywalk::IntersectionHandler";

/// Wall-clock durations of the last whole-index query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryTimings {
    pub sequential: Duration,
    /// `None` when the parallel query was disabled or unavailable.
    pub parallel: Option<Duration>,
}

impl QueryTimings {
    /// `seq: 0.123 ms, par: 0.045 ms` (`par: -` without a parallel run).
    pub fn text(&self) -> String {
        let parallel = self.parallel.map_or_else(|| "-".to_string(), format_millis);
        format!("seq: {}, par: {}", format_millis(self.sequential), parallel)
    }
}

/// Milliseconds with three decimals, e.g. `1.250 ms`.
pub fn format_millis(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

/// `(x, y, z)` with two decimals.
pub fn format_vec3(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

#[derive(Default)]
pub struct IntersectionHandler {
    ray: Option<Ray>,
    /// Bound only while a stepwise traversal is active.
    index: Option<Arc<dyn SpatialIndex>>,
    frontier: Frontier,
    points: Vec<Vec3>,
    wireframe: Vec<Vec3>,
    ray_segment: Option<[Vec3; 2]>,
    timings: Option<QueryTimings>,
}

impl IntersectionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot query over the whole index.
    ///
    /// Clears previous state, times `index.intersect`, and when
    /// `parallel_workers` is set also times `index.parallel_intersect`.
    /// The parallel result is only used for the timing comparison.
    pub fn find_intersections(
        &mut self,
        ray: Ray,
        index: &dyn SpatialIndex,
        parallel_workers: Option<usize>,
    ) {
        self.clear();

        let start = Instant::now();
        let points = index.intersect(&ray);
        let sequential = start.elapsed();

        let parallel = parallel_workers.and_then(|workers| {
            let start = Instant::now();
            let parallel_points = index.parallel_intersect(&ray, workers.max(1))?;
            let elapsed = start.elapsed();

            if parallel_points.len() != points.len() {
                crate::engine_warn!(
                    SOURCE,
                    "Parallel query found {} points, sequential found {}",
                    parallel_points.len(),
                    points.len()
                );
            }
            Some(elapsed)
        });

        if parallel_workers.is_some() && parallel.is_none() {
            crate::engine_debug!(SOURCE, "Parallel query unavailable for this index");
        }

        let timings = QueryTimings { sequential, parallel };
        crate::engine_info!(SOURCE, "{} point(s), {}", points.len(), timings.text());

        self.ray_segment = clip_to_root(&ray, index);
        self.ray = Some(ray);
        self.points = points;
        self.timings = Some(timings);
    }

    /// Reset the frontier to the root and bind `ray`/`index` for stepping.
    ///
    /// The clipped ray segment and the root box wireframe are available
    /// immediately, before the first step.
    pub fn start_traversal(&mut self, ray: Ray, index: Arc<dyn SpatialIndex>) {
        self.clear();

        self.frontier.ascend_to_root(index.as_ref());
        self.wireframe = self.frontier.create_wireframe(index.as_ref());
        self.ray_segment = clip_to_root(&ray, index.as_ref());
        self.ray = Some(ray);
        self.index = Some(index);

        crate::engine_debug!(SOURCE, "Traversal started from {}", format_vec3(ray.origin()));
    }

    /// One frontier step. Returns the number of points found on this step.
    ///
    /// No-op (returns 0) without an active traversal.
    pub fn traverse(&mut self) -> usize {
        let (Some(ray), Some(index)) = (self.ray, self.index.as_ref()) else {
            return 0;
        };

        let found = self.frontier.descend_along_ray(index.as_ref(), &ray);
        let count = found.len();
        self.points.extend(found);

        if self.frontier.is_empty() {
            self.wireframe.clear();
        } else {
            self.wireframe = self.frontier.create_wireframe(index.as_ref());
        }

        count
    }

    /// Drop all accumulated state and any bound traversal.
    pub fn clear(&mut self) {
        self.ray = None;
        self.index = None;
        self.frontier = Frontier::new();
        self.points.clear();
        self.wireframe.clear();
        self.ray_segment = None;
        self.timings = None;
    }

    // ===== GETTERS =====

    /// Ray of the current query or traversal.
    pub fn ray(&self) -> Option<&Ray> {
        self.ray.as_ref()
    }

    /// Hit points in discovery order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Line-list vertices of the current frontier boxes.
    pub fn wireframe(&self) -> &[Vec3] {
        &self.wireframe
    }

    /// Ray clipped to the root box: `[entry (or origin if inside), exit]`.
    pub fn ray_segment(&self) -> Option<[Vec3; 2]> {
        self.ray_segment
    }

    pub fn timings(&self) -> Option<&QueryTimings> {
        self.timings.as_ref()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Whether `traverse` would do anything.
    pub fn is_traversing(&self) -> bool {
        self.index.is_some() && !self.frontier.is_empty()
    }

    /// Diagnostic lines: ray origin/direction, timings, point count.
    ///
    /// Empty when no query has been made since the last `clear`.
    pub fn info_lines(&self) -> Vec<String> {
        let Some(ray) = self.ray else {
            return Vec::new();
        };

        let mut lines = vec![
            format!("Position  {}", format_vec3(ray.origin())),
            format!("Direction {}", format_vec3(ray.direction())),
        ];
        if let Some(timings) = &self.timings {
            lines.push(timings.text());
        }
        lines.push(format!("Points: {}", self.points.len()));
        lines
    }
}

/// Ray segment inside the root box, starting no earlier than the origin.
fn clip_to_root(ray: &Ray, index: &dyn SpatialIndex) -> Option<[Vec3; 2]> {
    let (t_near, t_far) = index.root_aabb()?.intersect_ray(ray)?;
    let t_near = t_near.max(0.0);
    if !t_far.is_finite() {
        return None;
    }
    Some([ray.at(t_near), ray.at(t_far)])
}

#[cfg(test)]
#[path = "intersection_handler_tests.rs"]
mod tests;
