//! Pure selection fitting logic — functional core.
//!
//! This module has zero infrastructure dependencies.
//! It takes the dragged rectangle and the screen limits, and returns the
//! selection the button layout may work with.

use crate::geometry::{Point, Rect};

/// Clips a selection to the screen limits.
///
/// A selection of zero width or height is valid: the button layout
/// grows it internally. A selection entirely off-screen is not.
pub fn fit_selection(selection: Rect, limits: Rect) -> Result<Rect, SelectionError> {
    if limits.is_empty() {
        return Err(SelectionError::EmptyLimits {
            width: limits.width,
            height: limits.height,
        });
    }

    selection
        .intersection(&limits)
        .ok_or(SelectionError::OutOfBounds {
            requested: (selection.x, selection.y, selection.width, selection.height),
            limits: (limits.x, limits.y, limits.width, limits.height),
        })
}

/// Selection spanned by a drag from `anchor` to `cursor`, fitted to `limits`.
pub fn selection_from_drag(anchor: Point, cursor: Point, limits: Rect) -> Result<Rect, SelectionError> {
    fit_selection(Rect::from_corners(anchor, cursor), limits)
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Screen limits have no area ({width}x{height})")]
    EmptyLimits { width: i32, height: i32 },

    #[error(
        "Selection ({},{},{},{}) lies outside the screen ({},{} {}x{})",
        requested.0, requested.1, requested.2, requested.3,
        limits.0, limits.1, limits.2, limits.3
    )]
    OutOfBounds {
        requested: (i32, i32, i32, i32),
        limits: (i32, i32, i32, i32),
    },

    #[error("No selection drag in progress")]
    NotDragging,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

    #[test]
    fn selection_inside_screen_is_unchanged() {
        let sel = Rect::new(10, 10, 50, 50);
        assert_eq!(fit_selection(sel, SCREEN).unwrap(), sel);
    }

    #[test]
    fn selection_is_clipped_to_screen() {
        let result = fit_selection(Rect::new(1900, 1000, 100, 100), SCREEN).unwrap();
        assert_eq!(result, Rect::new(1900, 1000, 20, 80));
    }

    #[test]
    fn zero_width_selection_is_kept() {
        let result = selection_from_drag(Point::new(40, 40), Point::new(40, 90), SCREEN).unwrap();
        assert_eq!(result, Rect::new(40, 40, 0, 50));
    }

    #[test]
    fn offscreen_selection_fails() {
        let result = fit_selection(Rect::new(3000, 10, 10, 10), SCREEN);
        assert!(matches!(result, Err(SelectionError::OutOfBounds { .. })));
    }

    #[test]
    fn empty_limits_fail() {
        let result = fit_selection(Rect::new(0, 0, 10, 10), Rect::new(0, 0, 0, 100));
        assert!(matches!(result, Err(SelectionError::EmptyLimits { .. })));
    }
}
