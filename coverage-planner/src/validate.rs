//! S6 — Validator & Metadata
//!
//! A self-check on the planner's own output, plus the path-length and
//! coverage-fraction figures reported in [`crate::Meta`]. The collision
//! check must never fire on correct output from S1-S5; it exists to catch
//! implementation bugs, not caller errors.

use itertools::Itertools;

use crate::error::PlannerError;
use crate::geometry::Rect;
use crate::lanes::Lane;
use crate::segments::FreeSegment;
use crate::trajectory::Waypoint;
use crate::warning::Warning;
use crate::{Meta, Wall};

/// Fail if any waypoint lies strictly inside a forbidden rectangle.
pub(crate) fn check_no_collision(waypoints: &[Waypoint], forbidden: &[Rect]) -> Result<(), PlannerError> {
    for (index, wp) in waypoints.iter().enumerate() {
        if let Some(&rect) = forbidden.iter().find(|r| r.strictly_contains(wp.x, wp.y)) {
            return Err(PlannerError::CollisionDetected { index, rect });
        }
    }
    Ok(())
}

/// Compute path length and coverage fraction.
///
/// Coverage is the lane-reachable area — `segment_length * d` summed over
/// every free segment, plus a `tool_width / 2` margin correction on the
/// first and last lane (which each contribute half a tool-width stripe
/// outside their own lane spacing) — divided by wall area, clipped to
/// `[0, 1]`.
pub(crate) fn compute_meta(
    waypoints: &[Waypoint],
    segmented: &[(Lane, Vec<FreeSegment>)],
    wall: &Wall,
    tool_width: f64,
    d: f64,
    warnings: Vec<Warning>,
) -> Meta {
    let path_length_m = path_length(waypoints);
    let coverage_fraction = coverage_fraction(segmented, wall, tool_width, d);

    Meta { path_length_m, coverage_fraction, num_waypoints: waypoints.len(), warnings }
}

fn path_length(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .iter()
        .tuple_windows()
        .map(|(a, b)| ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt())
        .sum()
}

fn coverage_fraction(segmented: &[(Lane, Vec<FreeSegment>)], wall: &Wall, tool_width: f64, d: f64) -> f64 {
    let wall_area = wall.width * wall.height;
    if wall_area <= 0.0 {
        return 0.0;
    }

    let lane_free_length = |segs: &[FreeSegment]| segs.iter().map(FreeSegment::length).sum::<f64>();

    let mut covered = 0.0;
    for (_, segs) in segmented {
        covered += lane_free_length(segs) * d;
    }

    if let (Some((_, first)), Some((_, last))) = (segmented.first(), segmented.last()) {
        covered += (tool_width / 2.0) * (lane_free_length(first) + lane_free_length(last));
    }

    (covered / wall_area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Axis;

    fn wp(x: f64, y: f64) -> Waypoint {
        Waypoint { x, y, theta: 0.0 }
    }

    #[test]
    fn path_length_sums_consecutive_euclidean_distances() {
        let waypoints = vec![wp(0.0, 0.0), wp(3.0, 0.0), wp(3.0, 4.0)];
        assert!((path_length(&waypoints) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn collision_check_flags_a_waypoint_inside_a_forbidden_rect() {
        let forbidden = vec![Rect::new(0.0, 0.0, 2.0, 2.0)];
        let waypoints = vec![wp(1.0, 1.0)];
        let err = check_no_collision(&waypoints, &forbidden).unwrap_err();
        assert!(matches!(err, PlannerError::CollisionDetected { index: 0, .. }));
    }

    #[test]
    fn collision_check_allows_a_waypoint_on_the_forbidden_boundary() {
        let forbidden = vec![Rect::new(0.0, 0.0, 2.0, 2.0)];
        let waypoints = vec![wp(0.0, 1.0)];
        assert!(check_no_collision(&waypoints, &forbidden).is_ok());
    }

    #[test]
    fn empty_wall_coverage_is_clipped_to_one() {
        // E1 geometry: full free segments on every lane can exceed the wall
        // area once the margin correction is added; coverage must clip.
        let wall = Wall::new(5.0, 3.0).unwrap();
        let lane = Lane { axis: Axis::Horizontal, coordinate: 0.25, start: 0.25, end: 4.75 };
        let seg = FreeSegment { axis: Axis::Horizontal, coordinate: 0.25, from: 0.25, to: 4.75 };
        let segmented: Vec<_> = (0..7).map(|_| (lane, vec![seg])).collect();
        let fraction = coverage_fraction(&segmented, &wall, 0.5, 0.45);
        assert!((fraction - 1.0).abs() < 1e-9);
    }

    #[test]
    fn obstacle_covering_the_wall_yields_zero_coverage() {
        let wall = Wall::new(2.0, 2.0).unwrap();
        let lane = Lane { axis: Axis::Vertical, coordinate: 0.25, start: 0.25, end: 1.75 };
        let segmented = vec![(lane, Vec::<FreeSegment>::new())];
        let fraction = coverage_fraction(&segmented, &wall, 0.5, 0.45);
        assert_eq!(fraction, 0.0);
    }
}
