//! S5 — Trajectory Assembler
//!
//! Orders free segments in boustrophedon sequence, discretizes each one,
//! and assigns a heading to every waypoint. Direction alternates by
//! position in the *non-empty* lane subsequence, not by raw lane index —
//! a lane with no free segments is skipped and does not consume a parity
//! slot.

use crate::geometry::EPS_SEG;
use crate::lanes::Lane;
use crate::orientation::Axis;
use crate::segments::FreeSegment;

use std::f64::consts::PI;

/// An oriented point on the trajectory. `theta` is in radians,
/// counterclockwise from `+X`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub theta: f64,
}

/// Assemble the full boustrophedon trajectory over a sequence of lanes
/// (ordered by increasing cross-axis coordinate), each annotated with its
/// free segments (ordered by ascending `from`).
pub(crate) fn assemble(lanes: &[(Lane, Vec<FreeSegment>)], tool_width: f64, d: f64) -> Vec<Waypoint> {
    let step = d.max(tool_width / 2.0);
    let mut waypoints = Vec::new();
    let mut parity = 0usize;
    let mut last_exit: Option<(f64, f64)> = None;

    for (lane, segs) in lanes {
        if segs.is_empty() {
            continue;
        }
        let ascending = parity % 2 == 0;
        let order = visiting_order(lane.axis, ascending, segs, last_exit);

        for seg in order {
            let (leading, trailing) = if ascending { (seg.from, seg.to) } else { (seg.to, seg.from) };
            for pos in sample_positions(leading, trailing, step) {
                let (x, y) = to_point(lane.axis, lane.coordinate, pos);
                let theta = heading(lane.axis, leading <= trailing);
                waypoints.push(Waypoint { x, y, theta });
            }
        }

        last_exit = waypoints.last().map(|w| (w.x, w.y));
        parity += 1;
    }

    waypoints
}

/// Decide which of a lane's free segments to enter first (closest leading
/// endpoint, by Euclidean distance, to the previous lane's exit point —
/// ties break by smaller free-axis coordinate), then continue through the
/// rest of the lane's segments in their assigned monotonic order.
fn visiting_order<'a>(
    axis: Axis,
    ascending: bool,
    segs: &'a [FreeSegment],
    last_exit: Option<(f64, f64)>,
) -> Vec<&'a FreeSegment> {
    let mut ordered: Vec<&FreeSegment> = segs.iter().collect();
    if !ascending {
        ordered.reverse();
    }

    let Some(exit) = last_exit else {
        return ordered;
    };

    let leading_of = |seg: &FreeSegment| if ascending { seg.from } else { seg.to };
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (i, seg) in ordered.iter().enumerate() {
        let coord = leading_of(seg);
        let (x, y) = to_point(axis, seg.coordinate, coord);
        let dist = ((x - exit.0).powi(2) + (y - exit.1).powi(2)).sqrt();
        if dist < best_dist - 1e-12
            || ((dist - best_dist).abs() <= 1e-12 && leading_of(ordered[best]) > coord)
        {
            best_dist = dist;
            best = i;
        }
    }

    let mut rotated = Vec::with_capacity(ordered.len());
    rotated.extend_from_slice(&ordered[best..]);
    rotated.extend_from_slice(&ordered[..best]);
    rotated
}

/// Sample positions along `[leading, trailing]` (in traversal order) at
/// step `Δ`, always including both endpoints.
fn sample_positions(leading: f64, trailing: f64, step: f64) -> Vec<f64> {
    let length = (trailing - leading).abs();
    if length < EPS_SEG {
        return vec![leading];
    }
    let sign = if trailing >= leading { 1.0 } else { -1.0 };
    let mut positions = vec![leading];
    let mut k = 1;
    loop {
        let candidate = leading + sign * step * k as f64;
        if sign * (trailing - candidate) <= EPS_SEG {
            break;
        }
        positions.push(candidate);
        k += 1;
    }
    positions.push(trailing);
    positions
}

fn to_point(axis: Axis, coordinate: f64, pos: f64) -> (f64, f64) {
    match axis {
        Axis::Vertical => (coordinate, pos),
        Axis::Horizontal => (pos, coordinate),
    }
}

fn heading(axis: Axis, forward: bool) -> f64 {
    match (axis, forward) {
        (Axis::Vertical, true) => PI / 2.0,
        (Axis::Vertical, false) => -PI / 2.0,
        (Axis::Horizontal, true) => 0.0,
        (Axis::Horizontal, false) => PI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(axis: Axis, coordinate: f64, from: f64, to: f64) -> FreeSegment {
        FreeSegment { axis, coordinate, from, to }
    }

    #[test]
    fn single_lane_single_segment_emits_both_endpoints() {
        let lane = Lane { axis: Axis::Vertical, coordinate: 1.0, start: 0.0, end: 2.0 };
        let lanes = vec![(lane, vec![seg(Axis::Vertical, 1.0, 0.0, 2.0)])];
        let wps = assemble(&lanes, 0.5, 0.45);
        assert_eq!(wps.first().unwrap().x, 1.0);
        assert_eq!(wps.first().unwrap().y, 0.0);
        assert_eq!(wps.last().unwrap().y, 2.0);
        assert!((wps.first().unwrap().theta - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn odd_indexed_non_empty_lane_sweeps_descending() {
        let lane0 = Lane { axis: Axis::Vertical, coordinate: 1.0, start: 0.0, end: 2.0 };
        let lane1 = Lane { axis: Axis::Vertical, coordinate: 1.5, start: 0.0, end: 2.0 };
        let lanes = vec![
            (lane0, vec![seg(Axis::Vertical, 1.0, 0.0, 2.0)]),
            (lane1, vec![seg(Axis::Vertical, 1.5, 0.0, 2.0)]),
        ];
        let wps = assemble(&lanes, 0.5, 0.45);
        let lane1_wps: Vec<_> = wps.iter().filter(|w| (w.x - 1.5).abs() < 1e-9).collect();
        assert!(lane1_wps.first().unwrap().y > lane1_wps.last().unwrap().y);
    }

    #[test]
    fn empty_lane_is_skipped_without_consuming_a_parity_slot() {
        let lane0 = Lane { axis: Axis::Vertical, coordinate: 1.0, start: 0.0, end: 2.0 };
        let lane1 = Lane { axis: Axis::Vertical, coordinate: 1.5, start: 0.0, end: 2.0 };
        let lane2 = Lane { axis: Axis::Vertical, coordinate: 2.0, start: 0.0, end: 2.0 };
        let lanes = vec![
            (lane0, vec![seg(Axis::Vertical, 1.0, 0.0, 2.0)]),
            (lane1, vec![]),
            (lane2, vec![seg(Axis::Vertical, 2.0, 0.0, 2.0)]),
        ];
        let wps = assemble(&lanes, 0.5, 0.45);
        // lane2 is the second *non-empty* lane, so it sweeps descending.
        let lane2_wps: Vec<_> = wps.iter().filter(|w| (w.x - 2.0).abs() < 1e-9).collect();
        assert!(lane2_wps.first().unwrap().y > lane2_wps.last().unwrap().y);
    }

    #[test]
    fn short_segment_yields_only_its_two_endpoints() {
        let positions = sample_positions(0.0, 0.1, 0.45);
        assert_eq!(positions, vec![0.0, 0.1]);
    }
}
