//! S2 — Orientation Selector

use crate::Wall;

/// Axis a lane runs along: a `Vertical` lane is a vertical line segment
/// (fixed `x`, varying `y`); a `Horizontal` lane is the transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Vertical,
    Horizontal,
}

/// Select the sweep axis: honor an explicit choice, or for `Auto` sweep
/// across the shorter wall dimension (vertical lanes when `W <= H`,
/// horizontal otherwise; ties favor vertical).
pub(crate) fn select(wall: &Wall, orientation: crate::Orientation) -> Axis {
    match orientation {
        crate::Orientation::Vertical => Axis::Vertical,
        crate::Orientation::Horizontal => Axis::Horizontal,
        crate::Orientation::Auto => {
            if wall.width <= wall.height {
                Axis::Vertical
            } else {
                Axis::Horizontal
            }
        }
    }
}
