//! The tool buttons shown around a capture selection.

use super::item::PlaceableItem;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Every tool button, in the order they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Pencil,
    Line,
    Arrow,
    Selection,
    Rectangle,
    Circle,
    Marker,
    SelectionIndicator,
    Move,
    Undo,
    Copy,
    Save,
    Exit,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 13] = [
        ButtonKind::Pencil,
        ButtonKind::Line,
        ButtonKind::Arrow,
        ButtonKind::Selection,
        ButtonKind::Rectangle,
        ButtonKind::Circle,
        ButtonKind::Marker,
        ButtonKind::SelectionIndicator,
        ButtonKind::Move,
        ButtonKind::Undo,
        ButtonKind::Copy,
        ButtonKind::Save,
        ButtonKind::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonKind::Pencil => "Pencil",
            ButtonKind::Line => "Line",
            ButtonKind::Arrow => "Arrow",
            ButtonKind::Selection => "Rectangular Selection",
            ButtonKind::Rectangle => "Rectangle",
            ButtonKind::Circle => "Circle",
            ButtonKind::Marker => "Marker",
            ButtonKind::SelectionIndicator => "Selection Size Indicator",
            ButtonKind::Move => "Move",
            ButtonKind::Undo => "Undo",
            ButtonKind::Copy => "Copy",
            ButtonKind::Save => "Save",
            ButtonKind::Exit => "Exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ButtonKind::Pencil => "Sets the Pencil as the paint tool",
            ButtonKind::Line => "Sets the Line as the paint tool",
            ButtonKind::Arrow => "Sets the Arrow as the paint tool",
            ButtonKind::Selection => "Sets the Selection as the paint tool",
            ButtonKind::Rectangle => "Sets the Rectangle as the paint tool",
            ButtonKind::Circle => "Sets the Circle as the paint tool",
            ButtonKind::Marker => "Sets the Marker as the paint tool",
            ButtonKind::SelectionIndicator => "Shows the dimensions of the selection (X Y)",
            ButtonKind::Move => "Move the selection area",
            ButtonKind::Undo => "Undo the last modification",
            ButtonKind::Copy => "Copy the selection into the clipboard",
            ButtonKind::Save => "Save the capture",
            ButtonKind::Exit => "Leave the capture screen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
    /// Shown through an animated transition that has not finished yet.
    FadingIn,
}

#[derive(Debug, Clone)]
pub struct CaptureButton {
    kind: ButtonKind,
    size: i32,
    position: Point,
    visibility: Visibility,
}

impl CaptureButton {
    pub fn new(kind: ButtonKind, size: i32) -> Self {
        Self {
            kind,
            size,
            position: Point::default(),
            visibility: Visibility::Hidden,
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.position, self.size)
    }

    /// Marks a running show animation as done.
    pub fn finish_transition(&mut self) {
        if self.visibility == Visibility::FadingIn {
            self.visibility = Visibility::Shown;
        }
    }
}

impl PlaceableItem for CaptureButton {
    fn base_size(&self) -> i32 {
        self.size
    }

    fn move_to(&mut self, pos: Point) {
        self.position = pos;
    }

    fn show(&mut self) {
        self.visibility = Visibility::Shown;
    }

    fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    fn animated_show(&mut self) {
        if self.visibility == Visibility::Hidden {
            self.visibility = Visibility::FadingIn;
        }
    }

    fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buttons_start_hidden() {
        let b = CaptureButton::new(ButtonKind::Copy, 24);
        assert!(b.is_hidden());
        assert!(!b.is_visible());
    }

    #[test]
    fn animated_show_fades_in_until_finished() {
        let mut b = CaptureButton::new(ButtonKind::Save, 24);
        b.animated_show();
        assert_eq!(b.visibility(), Visibility::FadingIn);
        assert!(b.is_visible());
        b.finish_transition();
        assert_eq!(b.visibility(), Visibility::Shown);
        b.animated_show();
        assert_eq!(b.visibility(), Visibility::Shown);
    }

    #[test]
    fn bounds_follow_moves() {
        let mut b = CaptureButton::new(ButtonKind::Arrow, 24);
        b.move_to(Point::new(10, 20));
        assert_eq!(b.bounds(), Rect::new(10, 20, 24, 24));
    }

    #[test]
    fn all_kinds_are_in_order() {
        let mut sorted = ButtonKind::ALL;
        sorted.sort();
        assert_eq!(sorted, ButtonKind::ALL);
    }
}
