//! Canonical serialization support.
//!
//! The persistence layer outside this crate treats a [`crate::Trajectory`]
//! as an opaque blob and requires round-trip equality on it — two planner
//! runs over equal inputs must serialize to the same JSON even though
//! `f64` arithmetic can differ in its last bit depending on instruction
//! ordering. `round9` rounds every coordinate/measurement field to the
//! same `ε_geom` precision the geometry pipeline already uses before
//! handing it to `serde`, so the stored representation doesn't carry
//! floating-point noise the pipeline itself doesn't consider significant.

use serde::Serializer;

use crate::geometry::EPS_GEOM;

pub(crate) fn round9<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let scale = 1.0 / EPS_GEOM;
    serializer.serialize_f64((value * scale).round() / scale)
}
