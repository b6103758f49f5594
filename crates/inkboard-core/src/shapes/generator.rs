//! Turns gesture samples into stroke geometry.

use crate::tools::ToolKind;
use kurbo::{BezPath, Ellipse, ParamCurveExtrema, PathEl, Point, Rect, Shape as KurboShape};

/// Flattening tolerance used when converting curved primitives to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Compute the path for the current sample of a gesture.
///
/// Freehand extends `accumulated` with `current`. Rectangle, ellipse and line
/// are rebuilt from `start` and `current` alone, so intermediate samples have
/// no effect on them. Returns an empty path when there is no gesture.
pub fn compute_path(
    kind: ToolKind,
    start: Option<Point>,
    current: Point,
    accumulated: &BezPath,
) -> BezPath {
    let Some(start) = start else {
        return BezPath::new();
    };

    match kind {
        ToolKind::Freehand => {
            let mut path = accumulated.clone();
            if path.elements().is_empty() {
                path.move_to(current);
            } else {
                path.line_to(current);
            }
            path
        }
        ToolKind::Rectangle => normalized_rect(start, current).to_path(PATH_TOLERANCE),
        ToolKind::Ellipse => {
            Ellipse::from_rect(normalized_rect(start, current)).to_path(PATH_TOLERANCE)
        }
        ToolKind::Line => {
            let mut path = BezPath::new();
            path.move_to(start);
            path.line_to(current);
            path
        }
    }
}

/// Bounding box of two corner points, independent of drag direction.
pub fn normalized_rect(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

/// Tight bounds of a path, or `None` if it has no points.
pub fn path_bounds(path: &BezPath) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for seg in path.segments() {
        let seg_bounds = ParamCurveExtrema::bounding_box(&seg);
        bounds = Some(bounds.map_or(seg_bounds, |b| b.union(seg_bounds)));
    }
    if bounds.is_some() {
        return bounds;
    }

    // A lone move-to has no segments but still marks a point.
    path.elements().iter().find_map(|el| match el {
        PathEl::MoveTo(p) => Some(Rect::from_points(*p, *p)),
        _ => None,
    })
}
