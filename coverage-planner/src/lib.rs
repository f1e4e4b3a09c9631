//! # coverage-planner
//!
//! Coverage path planning core for a rectangular wall-finishing robot.
//!
//! Given a rectangular wall, a set of axis-aligned rectangular obstacles,
//! and a tool/overlap/margin configuration, [`plan`] produces an ordered
//! sequence of oriented waypoints that cover all reachable wall area while
//! guaranteeing the tool center never enters an inflated obstacle zone.
//!
//! The planner is a pure, synchronous, deterministic function: no I/O, no
//! shared state, no partial results. It either returns a complete,
//! self-consistent [`Trajectory`] (possibly empty) or a [`PlannerError`].
//! Everything outside this crate — request handling, persistence,
//! visualization — is a thin shell around [`plan`] and is not this crate's
//! concern.
//!
//! ```
//! use coverage_planner::{plan, Orientation, PlannerParams, Rect, Wall};
//!
//! let wall = Wall::new(5.0, 3.0).unwrap();
//! let params = PlannerParams::new(0.5, 0.1, 0.1, Orientation::Auto).unwrap();
//! let trajectory = plan(wall, &[], params).unwrap();
//!
//! assert!(trajectory.meta.coverage_fraction >= 0.99);
//! ```

// ------ MODULE DECLARATIONS

#[cfg(feature = "serde")]
mod canonical;
mod error;
mod geometry;
mod lanes;
mod obstacles;
mod orientation;
mod segments;
mod trajectory;
mod validate;
mod warning;


// ------ RE-EXPORTS

pub use error::PlannerError;
pub use geometry::Rect;
pub use trajectory::Waypoint;
pub use warning::Warning;

// ------ IMPORTS

use lanes::Lane;
use segments::FreeSegment;

// ------ CONTENT

/// A rectangular wall, anchored at the origin.
///
/// `width` and `height` must both be strictly positive; use [`Wall::new`]
/// to construct a validated instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub width: f64,
    pub height: f64,
}

impl Wall {
    /// Build a wall, rejecting non-positive dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidParameters`] if `width` or `height`
    /// is not strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, PlannerError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(PlannerError::InvalidParameters(
                "wall width and height must be strictly positive",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Sweep orientation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    Vertical,
    Horizontal,
    Auto,
}

/// Tool and sweep configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerParams {
    /// Effective width of the tool footprint (`S`). Must be strictly positive.
    pub tool_width: f64,
    /// Fractional re-sweep between adjacent lanes (`o`). Must be in `[0, 1)`.
    pub overlap: f64,
    /// Half-width of the obstacle safety buffer (`m`). Must be non-negative.
    pub safe_margin: f64,
    pub orientation: Orientation,
}

impl PlannerParams {
    /// Build planner parameters, rejecting out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidParameters`] if `tool_width <= 0`,
    /// `overlap` is outside `[0, 1)`, or `safe_margin < 0`.
    pub fn new(
        tool_width: f64,
        overlap: f64,
        safe_margin: f64,
        orientation: Orientation,
    ) -> Result<Self, PlannerError> {
        if !(tool_width > 0.0) {
            return Err(PlannerError::InvalidParameters("tool_width must be strictly positive"));
        }
        if !(0.0..1.0).contains(&overlap) {
            return Err(PlannerError::InvalidParameters("overlap must be in [0, 1)"));
        }
        if safe_margin < 0.0 {
            return Err(PlannerError::InvalidParameters("safe_margin must be non-negative"));
        }
        Ok(Self { tool_width, overlap, safe_margin, orientation })
    }

    /// Lane spacing `d = S * (1 - o)`.
    fn lane_spacing(&self) -> f64 {
        self.tool_width * (1.0 - self.overlap)
    }
}

/// Planner output metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meta {
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub path_length_m: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub coverage_fraction: f64,
    pub num_waypoints: usize,
    pub warnings: Vec<Warning>,
}

/// Ordered waypoints and metadata produced by [`plan`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub forbidden_rects: Vec<Rect>,
    pub waypoints: Vec<Waypoint>,
    pub meta: Meta,
}

/// Plan a coverage trajectory.
///
/// Runs the full S1-S6 pipeline: obstacle preprocessing, orientation
/// selection, lane generation, lane segmentation, trajectory assembly, and
/// self-validation with metadata computation.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidParameters`] if `wall` or `params` is
/// malformed — `Wall::new`/`PlannerParams::new` reject this at construction
/// time, but both types have public fields, so `plan` re-checks them itself
/// rather than trusting a directly-built value — or
/// [`PlannerError::CollisionDetected`] if the self-check in S6 finds a
/// waypoint inside a forbidden rectangle — this indicates an implementation
/// bug, not a caller error.
pub fn plan(wall: Wall, obstacles: &[Rect], params: PlannerParams) -> Result<Trajectory, PlannerError> {
    if !(wall.width > 0.0) || !(wall.height > 0.0) {
        return Err(PlannerError::InvalidParameters("wall width and height must be strictly positive"));
    }
    if !(params.tool_width > 0.0) || !(0.0..1.0).contains(&params.overlap) {
        return Err(PlannerError::InvalidParameters(
            "tool_width must be positive and overlap must be in [0, 1)",
        ));
    }
    if params.safe_margin < 0.0 {
        return Err(PlannerError::InvalidParameters("safe_margin must be non-negative"));
    }

    let mut warnings = Vec::new();

    // S1 — obstacle preprocessing
    let (forbidden_rects, had_degenerate) =
        obstacles::inflate_clip_merge(&wall, obstacles, params.safe_margin);
    if had_degenerate {
        warnings.push(Warning::DegenerateObstacle);
    }
    log::debug!("S1: {} forbidden rectangle(s) after inflate/clip/merge", forbidden_rects.len());

    // S2 — orientation selection
    let axis = orientation::select(&wall, params.orientation);
    log::debug!("S2: sweep axis {axis:?}");

    // S3 — lane generation
    let d = params.lane_spacing();
    let lanes = lanes::generate(&wall, axis, params.tool_width, d);
    if lanes.is_empty() {
        warnings.push(Warning::WallTooSmall);
    }
    log::debug!("S3: {} lane(s), spacing {d}", lanes.len());

    // S4 — lane segmentation
    let segmented: Vec<(Lane, Vec<FreeSegment>)> = lanes
        .into_iter()
        .map(|lane| {
            let segs = segments::segment(&lane, &forbidden_rects);
            (lane, segs)
        })
        .collect();
    let any_free = segmented.iter().any(|(_, segs)| !segs.is_empty());
    if !any_free && !warnings.contains(&Warning::WallTooSmall) {
        warnings.push(Warning::NoFreeSpace);
    }
    log::debug!(
        "S4: {} free segment(s) total",
        segmented.iter().map(|(_, s)| s.len()).sum::<usize>()
    );

    // S5 — trajectory assembly
    let waypoints = trajectory::assemble(&segmented, params.tool_width, d);
    log::debug!("S5: {} waypoint(s) assembled", waypoints.len());

    // S6 — validation & metadata
    validate::check_no_collision(&waypoints, &forbidden_rects)?;
    let meta = validate::compute_meta(&waypoints, &segmented, &wall, params.tool_width, d, warnings);
    log::debug!(
        "S6: path length {:.3}m, coverage {:.4}",
        meta.path_length_m,
        meta.coverage_fraction
    );

    Ok(Trajectory { forbidden_rects, waypoints, meta })
}
