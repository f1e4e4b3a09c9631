//! Non-fatal planner conditions surfaced in [`crate::Meta::warnings`].

use std::fmt;

/// A non-fatal condition encountered while planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Warning {
    /// The usable lane span is empty — the wall is smaller than the tool.
    WallTooSmall,
    /// All lanes are fully covered by obstacles; the trajectory is empty.
    NoFreeSpace,
    /// An input obstacle had zero area after clipping and was dropped.
    DegenerateObstacle,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Warning::WallTooSmall => "wall_too_small",
            Warning::NoFreeSpace => "no_free_space",
            Warning::DegenerateObstacle => "degenerate_obstacle",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(Warning::WallTooSmall.to_string(), "wall_too_small");
        assert_eq!(Warning::NoFreeSpace.to_string(), "no_free_space");
        assert_eq!(Warning::DegenerateObstacle.to_string(), "degenerate_obstacle");
    }
}
