//! Capture selection domain — public API.
//!
//! This module owns the interactive side of a capture: turning pointer
//! drags into a selection and keeping the tool buttons laid out around it.
//! External code should only use the types exported here.

mod region;

pub use region::{fit_selection, selection_from_drag, SelectionError};

use crate::buttons::{ButtonHandler, CaptureButton, Side};
use crate::config::ButtonConfig;
use crate::geometry::{Point, Rect};

/// State of one capture screen: the selection being drawn and the
/// buttons around it. Driven from a single UI thread.
pub struct CaptureSession {
    buttons: ButtonHandler<CaptureButton>,
    limits: Rect,
    selection: Option<Rect>,
    drag_anchor: Option<Point>,
}

impl CaptureSession {
    pub fn new(config: &ButtonConfig, limits: Rect) -> Self {
        Self {
            buttons: ButtonHandler::new(config.build_buttons()),
            limits,
            selection: None,
            drag_anchor: None,
        }
    }

    pub fn buttons(&self) -> &ButtonHandler<CaptureButton> {
        &self.buttons
    }

    pub fn selection(&self) -> Option<Rect> {
        self.selection
    }

    pub fn limits(&self) -> Rect {
        self.limits
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Swaps in the buttons from a new config and lays them out again.
    pub fn reconfigure(&mut self, config: &ButtonConfig) {
        self.buttons.replace_items(config.build_buttons());
        if let Some(selection) = self.selection {
            self.buttons.update_position(selection, self.limits);
            self.buttons.show();
        }
        log::info!("[CAPTURE] Reconfigured with {} buttons", self.buttons.count());
    }

    /// Sets the selection directly, e.g. from a keyboard shortcut.
    pub fn set_selection(&mut self, selection: Rect) -> Result<Rect, SelectionError> {
        let fitted = fit_selection(selection, self.limits)?;
        self.apply_selection(fitted);
        if !self.is_dragging() {
            self.buttons.show();
        }
        Ok(fitted)
    }

    /// Starts drawing a new selection. Buttons stay hidden while dragging.
    pub fn begin_selection(&mut self, anchor: Point) {
        self.drag_anchor = Some(anchor);
        self.buttons.hide();
    }

    pub fn drag_selection_to(&mut self, cursor: Point) -> Result<Rect, SelectionError> {
        let Some(anchor) = self.drag_anchor else {
            log::warn!("[CAPTURE] Drag update without an anchor — ignored");
            return Err(SelectionError::NotDragging);
        };
        let fitted = selection_from_drag(anchor, cursor, self.limits)?;
        self.apply_selection(fitted);
        Ok(fitted)
    }

    /// Ends the drag and brings the buttons back.
    pub fn finish_selection(&mut self) {
        if self.drag_anchor.take().is_none() {
            return;
        }
        if let Some(selection) = self.selection {
            log::info!(
                "[CAPTURE] Selected {}x{} at {},{}",
                selection.width,
                selection.height,
                selection.x,
                selection.y
            );
            self.buttons.show();
        }
    }

    /// While drawing on the capture, buttons under the pointer get out of the way.
    pub fn pointer_moved_while_drawing(&mut self, cursor: Point) -> Option<Side> {
        self.buttons.hide_group_under_point(cursor)
    }

    pub fn drawing_finished(&mut self) {
        if self.buttons.is_partially_hidden() {
            self.buttons.show();
        }
    }

    /// True when `p` is over a button group rather than the capture.
    pub fn is_over_buttons(&self, p: Point) -> bool {
        self.buttons.contains_point(p)
    }

    fn apply_selection(&mut self, selection: Rect) {
        self.selection = Some(selection);
        self.buttons.update_position(selection, self.limits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::PlaceableItem;

    const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

    fn session() -> CaptureSession {
        CaptureSession::new(&ButtonConfig::default(), SCREEN)
    }

    #[test]
    fn buttons_hidden_during_drag_and_shown_after() {
        let mut s = session();
        s.begin_selection(Point::new(600, 400));
        s.drag_selection_to(Point::new(900, 700)).unwrap();
        assert!(s.is_dragging());
        assert!(s.buttons().buttons().iter().all(|b| b.is_hidden()));

        s.finish_selection();
        assert!(!s.is_dragging());
        assert!(s.buttons().all_visible());
        assert_eq!(s.selection(), Some(Rect::new(600, 400, 300, 300)));
    }

    #[test]
    fn drag_without_anchor_is_ignored() {
        let mut s = session();
        s.set_selection(Rect::new(100, 100, 50, 50)).unwrap();
        let result = s.drag_selection_to(Point::new(10, 10));
        assert!(matches!(result, Err(SelectionError::NotDragging)));
        assert_eq!(s.selection(), Some(Rect::new(100, 100, 50, 50)));
    }

    #[test]
    fn drawing_over_buttons_hides_then_restores() {
        let mut s = session();
        s.begin_selection(Point::new(600, 400));
        s.drag_selection_to(Point::new(900, 700)).unwrap();
        s.finish_selection();

        let bottom = s.buttons().region(Side::Bottom).bounding_rect().unwrap();
        let probe = bottom.center();
        assert!(s.is_over_buttons(probe));
        assert_eq!(s.pointer_moved_while_drawing(probe), Some(Side::Bottom));
        assert!(!s.buttons().all_visible());

        s.drawing_finished();
        assert!(s.buttons().all_visible());
        assert!(!s.buttons().is_partially_hidden());
    }

    #[test]
    fn reconfigure_relayouts_current_selection() {
        let mut s = session();
        s.set_selection(Rect::new(600, 400, 300, 300)).unwrap();
        let config = ButtonConfig {
            button_size: 30,
            buttons: vec![crate::buttons::ButtonKind::Copy],
        };
        s.reconfigure(&config);
        assert_eq!(s.buttons().count(), 1);
        assert_eq!(s.buttons().group(Side::Bottom), &[0]);
    }
}
