//! S3 — Lane Generator

use crate::geometry::EPS_GEOM;
use crate::orientation::Axis;
use crate::Wall;

/// A straight sweep path along one axis, before obstacle subtraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lane {
    pub axis: Axis,
    pub coordinate: f64,
    pub start: f64,
    pub end: f64,
}

/// Generate the lanes for a sweep axis at spacing `d`, offsetting the first
/// and last lane inward by `tool_width / 2` and appending a final lane flush
/// with the far wall edge when `d` does not evenly divide the usable span.
///
/// Returns an empty list if the usable span along the sweep axis is
/// negative (the wall is smaller than the tool) — the caller turns this
/// into a [`crate::Warning::WallTooSmall`].
pub(crate) fn generate(wall: &Wall, axis: Axis, tool_width: f64, d: f64) -> Vec<Lane> {
    let half = tool_width / 2.0;
    let (cross_extent, free_extent) = match axis {
        Axis::Vertical => (wall.width, wall.height),
        Axis::Horizontal => (wall.height, wall.width),
    };

    if free_extent - tool_width < -EPS_GEOM {
        return Vec::new();
    }
    if cross_extent - tool_width < -EPS_GEOM {
        return Vec::new();
    }

    let last_coord = cross_extent - half;
    let mut coords = Vec::new();
    let mut i = 0usize;
    loop {
        let coord = half + i as f64 * d;
        if coord > last_coord + EPS_GEOM {
            break;
        }
        coords.push(coord);
        i += 1;
    }
    if coords.last().map(|&c| c < last_coord - EPS_GEOM).unwrap_or(true) {
        coords.push(last_coord);
    }

    let (start, end) = (half, free_extent - half);
    coords
        .into_iter()
        .map(|coordinate| Lane { axis, coordinate, start, end })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_span_yields_no_lanes() {
        let wall = Wall::new(0.3, 0.3).unwrap();
        assert!(generate(&wall, Axis::Vertical, 0.5, 0.45).is_empty());
    }

    #[test]
    fn horizontal_sweep_on_5x3_wall_has_at_least_six_lanes() {
        // E1: S=0.5, o=0.1 -> d=0.45, horizontal sweep across the 5m width.
        let wall = Wall::new(5.0, 3.0).unwrap();
        let lanes = generate(&wall, Axis::Horizontal, 0.5, 0.45);
        assert!(lanes.len() >= 6, "expected >= 6 lanes, got {}", lanes.len());
        for lane in &lanes {
            assert_eq!(lane.axis, Axis::Horizontal);
            assert!(lane.coordinate <= 3.0 - 0.25 + EPS_GEOM);
        }
    }

    #[test]
    fn last_lane_is_flush_with_far_edge_when_spacing_does_not_divide_evenly() {
        let wall = Wall::new(5.0, 3.0).unwrap();
        let lanes = generate(&wall, Axis::Horizontal, 0.5, 0.45);
        let last = lanes.last().unwrap();
        assert!((last.coordinate - (3.0 - 0.25)).abs() < 1e-9);
    }

    #[test]
    fn lane_span_is_inset_by_half_tool_width() {
        let wall = Wall::new(5.0, 3.0).unwrap();
        let lanes = generate(&wall, Axis::Vertical, 0.5, 0.45);
        for lane in &lanes {
            assert!((lane.start - 0.25).abs() < 1e-9);
            assert!((lane.end - (3.0 - 0.25)).abs() < 1e-9);
        }
    }
}
