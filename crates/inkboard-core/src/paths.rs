//! Vector stroke collection with undo/redo.

use crate::shapes::{Stroke, StrokeId, StrokeStyle, compute_path};
use crate::tools::ToolKind;
use kurbo::{BezPath, Point};

/// Width range reachable through pressure emulation.
pub const PRESSURE_WIDTH_RANGE: (f64, f64) = (1.0, 40.0);
/// Opacity range reachable through pressure emulation.
pub const PRESSURE_OPACITY_RANGE: (f64, f64) = (0.1, 1.0);

/// Map the distance between two consecutive samples to `(width, opacity)`.
///
/// Slow gestures (short distances) give thin opaque strokes, fast ones give
/// wide faint strokes.
pub fn emulate_pressure(distance: f64) -> (f64, f64) {
    let width = (distance / 2.0).clamp(PRESSURE_WIDTH_RANGE.0, PRESSURE_WIDTH_RANGE.1);
    let opacity = (1.0 - distance / 200.0).clamp(PRESSURE_OPACITY_RANGE.0, PRESSURE_OPACITY_RANGE.1);
    (width, opacity)
}

/// State of the gesture being drawn.
#[derive(Debug, Clone, Default)]
enum GestureState {
    #[default]
    Idle,
    Active {
        /// Tool the gesture started with.
        kind: ToolKind,
        /// First sample of the gesture.
        start: Point,
        /// Last sample, for pressure emulation.
        previous: Point,
        /// Geometry built so far.
        path: BezPath,
    },
}

/// Committed vector strokes plus the stroke in progress.
#[derive(Debug, Clone, Default)]
pub struct PathStore {
    strokes: Vec<Stroke>,
    /// Strokes removed by undo, most recent last.
    undone: Vec<Stroke>,
    gesture: GestureState,
}

impl PathStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at `point`. Ignored while another gesture is active.
    pub fn begin_stroke(&mut self, point: Point, kind: ToolKind) {
        if self.is_active() {
            log::trace!("begin_stroke ignored, gesture already active");
            return;
        }
        let path = compute_path(kind, Some(point), point, &BezPath::new());
        self.gesture = GestureState::Active {
            kind,
            start: point,
            previous: point,
            path,
        };
        log::trace!("Stroke started at {point:?} with {kind:?}");
    }

    /// Add a sample to the active gesture.
    ///
    /// With `pressure_emulation`, the distance from the previous sample is
    /// written into `style` as width and opacity.
    pub fn extend_stroke(&mut self, point: Point, style: &mut StrokeStyle, pressure_emulation: bool) {
        let GestureState::Active {
            kind,
            start,
            previous,
            path,
        } = &mut self.gesture
        else {
            return;
        };

        *path = compute_path(*kind, Some(*start), point, path);

        if pressure_emulation {
            let (width, opacity) = emulate_pressure(previous.distance(point));
            style.width = width;
            style.opacity = opacity;
        }
        *previous = point;
    }

    /// Commit the active gesture as a stroke with `style`.
    ///
    /// Invalidates the redo history. Returns the new stroke's id, or `None`
    /// when no gesture was active.
    pub fn end_stroke(&mut self, style: &StrokeStyle) -> Option<StrokeId> {
        let GestureState::Active { path, .. } = std::mem::take(&mut self.gesture) else {
            return None;
        };
        let stroke = Stroke::new(path, *style);
        let id = stroke.id();
        self.strokes.push(stroke);
        self.undone.clear();
        log::debug!("Stroke committed ({} strokes)", self.strokes.len());
        Some(id)
    }

    /// Abandon the active gesture without committing it.
    pub fn cancel_stroke(&mut self) {
        if self.is_active() {
            self.gesture = GestureState::Idle;
            log::trace!("Stroke cancelled");
        }
    }

    /// Move the most recent stroke to the undo stack.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(stroke) = self.strokes.pop() {
            self.undone.push(stroke);
            log::debug!("Stroke undone ({} strokes)", self.strokes.len());
            true
        } else {
            false
        }
    }

    /// Restore the most recently undone stroke.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(stroke) = self.undone.pop() {
            self.strokes.push(stroke);
            log::debug!("Stroke redone ({} strokes)", self.strokes.len());
            true
        } else {
            false
        }
    }

    /// Drop every stroke and all history. Cannot be undone.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.undone.clear();
        self.gesture = GestureState::Idle;
        log::debug!("Vector strokes cleared");
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Geometry of the gesture in progress.
    pub fn in_progress(&self) -> Option<&BezPath> {
        match &self.gesture {
            GestureState::Active { path, .. } => Some(path),
            GestureState::Idle => None,
        }
    }

    /// First sample of the gesture in progress.
    pub fn start_point(&self) -> Option<Point> {
        match &self.gesture {
            GestureState::Active { start, .. } => Some(*start),
            GestureState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.gesture, GestureState::Active { .. })
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use kurbo::PathEl;

    fn draw(store: &mut PathStore, kind: ToolKind, points: &[Point], style: &mut StrokeStyle) {
        store.begin_stroke(points[0], kind);
        for &p in &points[1..] {
            store.extend_stroke(p, style, false);
        }
        store.end_stroke(style);
    }

    #[test]
    fn test_freehand_scenario() {
        let mut store = PathStore::new();
        let mut style = StrokeStyle::default();

        store.begin_stroke(Point::new(0.0, 0.0), ToolKind::Freehand);
        store.extend_stroke(Point::new(10.0, 0.0), &mut style, false);
        assert_eq!(
            store.in_progress().unwrap().elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 0.0))
            ]
        );

        store.end_stroke(&style);
        assert_eq!(store.len(), 1);
        assert!(!store.is_active());
        assert!(store.in_progress().is_none());
        let committed = store.strokes()[0].clone();

        assert!(store.undo());
        assert!(store.is_empty());

        assert!(store.redo());
        assert_eq!(store.strokes()[0], committed);
    }

    #[test]
    fn test_commit_clears_redo() {
        let mut store = PathStore::new();
        let mut style = StrokeStyle::default();
        draw(&mut store, ToolKind::Line, &[Point::ZERO, Point::new(5.0, 5.0)], &mut style);
        draw(&mut store, ToolKind::Line, &[Point::ZERO, Point::new(6.0, 6.0)], &mut style);

        store.undo();
        assert!(store.can_redo());

        draw(&mut store, ToolKind::Line, &[Point::ZERO, Point::new(7.0, 7.0)], &mut style);
        assert!(!store.can_redo());
        assert!(!store.redo());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_then_undo_is_noop() {
        let mut store = PathStore::new();
        let mut style = StrokeStyle::default();
        draw(&mut store, ToolKind::Freehand, &[Point::ZERO, Point::new(1.0, 1.0)], &mut style);
        draw(&mut store, ToolKind::Freehand, &[Point::ZERO, Point::new(2.0, 2.0)], &mut style);
        store.undo();

        store.clear();
        assert!(!store.undo());
        assert!(!store.redo());
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_history_noops() {
        let mut store = PathStore::new();
        let mut style = StrokeStyle::default();
        assert!(!store.undo());
        assert!(!store.redo());

        store.extend_stroke(Point::new(3.0, 3.0), &mut style, true);
        assert!(store.in_progress().is_none());
        assert_eq!(style, StrokeStyle::default());

        assert!(store.end_stroke(&style).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_begin_while_active_is_ignored() {
        let mut store = PathStore::new();
        store.begin_stroke(Point::ZERO, ToolKind::Line);
        store.begin_stroke(Point::new(50.0, 50.0), ToolKind::Rectangle);
        assert_eq!(store.start_point(), Some(Point::ZERO));
    }

    #[test]
    fn test_cancel_does_not_commit() {
        let mut store = PathStore::new();
        let mut style = StrokeStyle::default();
        store.begin_stroke(Point::ZERO, ToolKind::Freehand);
        store.extend_stroke(Point::new(1.0, 0.0), &mut style, false);
        store.cancel_stroke();

        assert!(!store.is_active());
        assert!(store.end_stroke(&style).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_pressure_formula() {
        assert_eq!(emulate_pressure(0.0), (1.0, 1.0));
        assert_eq!(emulate_pressure(20.0), (10.0, 0.9));
        assert_eq!(emulate_pressure(100.0), (40.0, 0.5));
        assert_eq!(emulate_pressure(500.0), (40.0, 0.1));
    }

    #[test]
    fn test_pressure_updates_style() {
        let mut store = PathStore::new();
        let mut style = StrokeStyle {
            color: Rgba::rgb(0, 0, 255),
            width: 2.0,
            opacity: 1.0,
        };

        store.begin_stroke(Point::new(0.0, 0.0), ToolKind::Freehand);
        store.extend_stroke(Point::new(30.0, 40.0), &mut style, true);
        assert_eq!(style.width, 25.0);
        assert_eq!(style.opacity, 0.75);

        store.end_stroke(&style);
        let stroke = &store.strokes()[0];
        assert_eq!(stroke.width(), 25.0);
        assert_eq!(stroke.opacity(), 0.75);
        assert_eq!(stroke.color(), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn test_pressure_disabled_keeps_style() {
        let mut store = PathStore::new();
        let mut style = StrokeStyle::default();
        store.begin_stroke(Point::ZERO, ToolKind::Freehand);
        store.extend_stroke(Point::new(300.0, 0.0), &mut style, false);
        assert_eq!(style, StrokeStyle::default());
    }
}
