//! The handle the layout engine moves around.

use crate::geometry::Point;

/// A fixed-size square element positioned by [`ButtonHandler`].
///
/// Every item held by one handler must report the same `base_size`.
///
/// [`ButtonHandler`]: super::ButtonHandler
pub trait PlaceableItem {
    /// Edge length of the square.
    fn base_size(&self) -> i32;

    /// Moves the item's top-left corner to `pos`.
    fn move_to(&mut self, pos: Point);

    fn show(&mut self);

    fn hide(&mut self);

    /// Shows the item with a transition. How it animates is up to the item.
    fn animated_show(&mut self);

    fn is_hidden(&self) -> bool;

    fn is_visible(&self) -> bool {
        !self.is_hidden()
    }
}
