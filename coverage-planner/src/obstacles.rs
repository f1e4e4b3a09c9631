//! S1 — Obstacle Preprocessor
//!
//! Inflates, clips, and merges raw obstacle rectangles into a set of
//! pairwise interior-disjoint forbidden rectangles, each fully inside the
//! wall. Merging is intentionally conservative: overlapping rectangles are
//! replaced by their bounding box, which can only grow forbidden area, never
//! shrink it.

use crate::geometry::Rect;
use crate::Wall;

/// Run the inflate / clip / merge pipeline described in `spec.md` S1.
///
/// Returns the disjoint forbidden rectangle set and whether at least one
/// input obstacle was dropped for having zero clipped area (the caller
/// turns this into a [`crate::Warning::DegenerateObstacle`]).
pub(crate) fn inflate_clip_merge(wall: &Wall, raw: &[Rect], margin: f64) -> (Vec<Rect>, bool) {
    let bounds = Rect::new(0.0, 0.0, wall.width, wall.height);

    let mut had_degenerate = false;
    let mut clipped: Vec<Rect> = Vec::with_capacity(raw.len());
    for obstacle in raw {
        let inflated = obstacle.inflate(margin);
        match inflated.intersect(&bounds) {
            Some(rect) if !rect.is_degenerate() => clipped.push(rect),
            _ => had_degenerate = true,
        }
    }

    (merge_to_fixpoint(clipped), had_degenerate)
}

/// Repeatedly replace overlapping rectangle pairs by their bounding box
/// until a full pass produces no merges.
fn merge_to_fixpoint(mut rects: Vec<Rect>) -> Vec<Rect> {
    loop {
        let mut merged_any = false;
        let mut next: Vec<Rect> = Vec::with_capacity(rects.len());

        'outer: for rect in rects.drain(..) {
            for existing in &mut next {
                if existing.overlaps(&rect) {
                    *existing = existing.union_bbox(&rect);
                    merged_any = true;
                    continue 'outer;
                }
            }
            next.push(rect);
        }

        rects = next;
        if !merged_any {
            return rects;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> Wall {
        Wall::new(5.0, 3.0).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let (forbidden, degenerate) = inflate_clip_merge(&wall(), &[], 0.1);
        assert!(forbidden.is_empty());
        assert!(!degenerate);
    }

    #[test]
    fn single_obstacle_inflates_and_clips() {
        let obstacle = Rect::new(1.0, 1.0, 0.5, 0.5);
        let (forbidden, degenerate) = inflate_clip_merge(&wall(), &[obstacle], 0.1);
        assert!(!degenerate);
        assert_eq!(forbidden.len(), 1);
        let r = forbidden[0];
        assert!((r.x - 0.9).abs() < 1e-9);
        assert!((r.y - 0.9).abs() < 1e-9);
        assert!((r.width - 0.7).abs() < 1e-9);
        assert!((r.height - 0.7).abs() < 1e-9);
    }

    #[test]
    fn touching_obstacles_merge_into_one_rect() {
        let a = Rect::new(1.0, 1.0, 0.5, 0.5);
        let b = Rect::new(1.5, 1.0, 0.5, 0.5);
        let (forbidden, _) = inflate_clip_merge(&wall(), &[a, b], 0.1);
        assert_eq!(forbidden.len(), 1);
        assert_eq!(forbidden[0], Rect::new(0.9, 0.9, 1.2, 0.7));
    }

    #[test]
    fn obstacle_entirely_outside_wall_is_dropped_as_degenerate() {
        let obstacle = Rect::new(-5.0, -5.0, 1.0, 1.0);
        let (forbidden, degenerate) = inflate_clip_merge(&wall(), &[obstacle], 0.0);
        assert!(forbidden.is_empty());
        assert!(degenerate);
    }

    #[test]
    fn obstacle_at_wall_edge_clips_without_becoming_degenerate() {
        let obstacle = Rect::new(4.5, 0.0, 1.0, 1.0);
        let (forbidden, degenerate) = inflate_clip_merge(&wall(), &[obstacle], 0.0);
        assert!(!degenerate);
        assert_eq!(forbidden.len(), 1);
        assert!((forbidden[0].x_max() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn all_forbidden_rects_stay_inside_wall() {
        let obstacle = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let (forbidden, _) = inflate_clip_merge(&wall(), &[obstacle], 0.5);
        for r in &forbidden {
            assert!(r.x >= -1e-9 && r.y >= -1e-9);
            assert!(r.x_max() <= wall().width + 1e-9);
            assert!(r.y_max() <= wall().height + 1e-9);
        }
    }
}
