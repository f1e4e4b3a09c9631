//! S4 — Lane Segmenter
//!
//! Subtracts the forbidden rectangles crossing a lane's cross-axis
//! coordinate from the lane's free-axis span, producing the list of free
//! subintervals the trajectory assembler sweeps.

use itertools::Itertools;

use crate::geometry::{Rect, EPS_GEOM, EPS_SEG};
use crate::lanes::Lane;
use crate::orientation::Axis;

/// A free subinterval of a lane, surviving obstacle subtraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FreeSegment {
    pub axis: Axis,
    pub coordinate: f64,
    pub from: f64,
    pub to: f64,
}

impl FreeSegment {
    pub fn length(&self) -> f64 {
        self.to - self.from
    }
}

/// Subtract forbidden rectangles from a lane, yielding its free segments.
pub(crate) fn segment(lane: &Lane, forbidden: &[Rect]) -> Vec<FreeSegment> {
    let mut forbidden_intervals: Vec<(f64, f64)> = forbidden
        .iter()
        .filter(|rect| crosses(lane, rect))
        .map(|rect| project(lane.axis, rect))
        .collect();
    forbidden_intervals.sort_by(|a, b| a.0.total_cmp(&b.0));

    let merged: Vec<(f64, f64)> = forbidden_intervals
        .into_iter()
        .coalesce(|(lo_a, hi_a), (lo_b, hi_b)| {
            if lo_b <= hi_a + EPS_GEOM {
                Ok((lo_a, hi_a.max(hi_b)))
            } else {
                Err(((lo_a, hi_a), (lo_b, hi_b)))
            }
        })
        .collect();
    subtract(lane, &merged)
        .into_iter()
        .filter(|(from, to)| to - from >= EPS_SEG)
        .map(|(from, to)| FreeSegment { axis: lane.axis, coordinate: lane.coordinate, from, to })
        .collect()
}

/// A lane at cross-axis coordinate `c` crosses `rect` when `rect`'s
/// cross-axis extent strictly contains `c` — a lane tangent to a
/// rectangle's edge is *not* considered inside it.
fn crosses(lane: &Lane, rect: &Rect) -> bool {
    let c = lane.coordinate;
    match lane.axis {
        Axis::Vertical => rect.x + EPS_GEOM < c && c < rect.x_max() - EPS_GEOM,
        Axis::Horizontal => rect.y + EPS_GEOM < c && c < rect.y_max() - EPS_GEOM,
    }
}

/// Project a rectangle onto a lane's free axis.
fn project(axis: Axis, rect: &Rect) -> (f64, f64) {
    match axis {
        Axis::Vertical => (rect.y, rect.y_max()),
        Axis::Horizontal => (rect.x, rect.x_max()),
    }
}

fn subtract(lane: &Lane, merged_forbidden: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut free = Vec::new();
    let mut cursor = lane.start;
    for &(lo, hi) in merged_forbidden {
        let lo = lo.max(lane.start);
        let hi = hi.min(lane.end);
        if hi <= cursor {
            continue;
        }
        if lo > cursor {
            free.push((cursor, lo));
        }
        cursor = cursor.max(hi);
    }
    if cursor < lane.end {
        free.push((cursor, lane.end));
    }
    free
}
