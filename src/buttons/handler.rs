//! Button handler — moves, groups and hides the capture buttons as a unit.
//!
//! The handler owns its buttons. Replacing the collection drops the old
//! buttons; `into_buttons` hands them back to the caller instead.

use super::item::PlaceableItem;
use super::placement::{self, Side, SEPARATION};
use crate::geometry::{Point, Rect, Region};

#[derive(Debug, Default)]
struct SideGroup {
    members: Vec<usize>,
    region: Region,
}

pub struct ButtonHandler<B> {
    buttons: Vec<B>,
    button_size: i32,
    groups: [SideGroup; 5],
    partially_hidden: bool,
    buttons_inside: bool,
}

impl<B: PlaceableItem> Default for ButtonHandler<B> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<B: PlaceableItem> ButtonHandler<B> {
    pub fn new(buttons: Vec<B>) -> Self {
        let mut handler = Self {
            buttons: Vec::new(),
            button_size: 0,
            groups: Default::default(),
            partially_hidden: false,
            buttons_inside: false,
        };
        handler.install(buttons);
        handler
    }

    /// Replaces every button. The old buttons are dropped.
    ///
    /// Positions are not recomputed; call [`update_position`] afterwards.
    ///
    /// [`update_position`]: Self::update_position
    pub fn replace_items(&mut self, buttons: Vec<B>) {
        let released = self.buttons.len();
        self.install(buttons);
        self.reset_groups();
        log::debug!(
            "[BUTTONS] Replaced {} buttons with {}",
            released,
            self.buttons.len()
        );
    }

    fn install(&mut self, buttons: Vec<B>) {
        if let Some(first) = buttons.first() {
            self.button_size = first.base_size();
            if buttons.iter().any(|b| b.base_size() != self.button_size) {
                log::warn!(
                    "[BUTTONS] Mixed button sizes; laying out with {}px",
                    self.button_size
                );
            }
        }
        self.buttons = buttons;
    }

    /// Gives the buttons back, consuming the handler.
    pub fn into_buttons(self) -> Vec<B> {
        self.buttons
    }

    pub fn buttons(&self) -> &[B] {
        &self.buttons
    }

    pub fn button_size(&self) -> i32 {
        self.button_size
    }

    /// Distance between the origins of two neighbouring buttons.
    pub fn item_pitch(&self) -> i32 {
        self.button_size + SEPARATION
    }

    pub fn count(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn is_partially_hidden(&self) -> bool {
        self.partially_hidden
    }

    /// True when the last layout ran out of room and placed buttons inside
    /// the selection.
    pub fn is_overflowed_inside(&self) -> bool {
        self.buttons_inside
    }

    /// Indices (into [`buttons`](Self::buttons)) of the buttons on `side`.
    pub fn group(&self, side: Side) -> &[usize] {
        &self.groups[side.index()].members
    }

    pub fn region(&self, side: Side) -> &Region {
        &self.groups[side.index()].region
    }

    pub fn side_of(&self, index: usize) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.group(*side).contains(&index))
    }

    fn reset_groups(&mut self) {
        self.buttons_inside = false;
        for group in &mut self.groups {
            group.members.clear();
            group.region.clear();
        }
    }

    /// Lays the buttons out around `selection` without leaving `limits`.
    ///
    /// Called on every change of the selection geometry. Does nothing
    /// when there are no buttons.
    pub fn update_position(&mut self, selection: Rect, limits: Rect) {
        self.reset_groups();
        if self.buttons.is_empty() {
            return;
        }

        let plan = placement::plan_layout(selection, limits, self.buttons.len(), self.button_size);

        let mut next = 0;
        for run in &plan.runs {
            let group = &mut self.groups[run.side.index()];
            for pos in &run.positions {
                self.buttons[next].move_to(*pos);
                group.members.push(next);
                next += 1;
            }
            if let Some(rect) = placement::run_hit_rect(&run.positions, self.button_size) {
                group.region.add(rect);
            }
        }
        self.buttons_inside = plan.overflowed_inside;

        if self.buttons_inside {
            log::info!(
                "[BUTTONS] No room around {}x{} selection; {} buttons placed inside",
                selection.width,
                selection.height,
                self.group(Side::Inside).len()
            );
        }
        log::debug!(
            "[BUTTONS] Layout for {:?} in {:?}: top={} bottom={} right={} left={} inside={}",
            selection,
            limits,
            self.group(Side::Top).len(),
            self.group(Side::Bottom).len(),
            self.group(Side::Right).len(),
            self.group(Side::Left).len(),
            self.group(Side::Inside).len()
        );
    }

    pub fn hide(&mut self) {
        for b in &mut self.buttons {
            b.hide();
        }
    }

    /// Shows the buttons. After a partial hide only the hidden ones are
    /// brought back.
    pub fn show(&mut self) {
        if self.partially_hidden {
            self.partially_hidden = false;
            for b in self.buttons.iter_mut().filter(|b| b.is_hidden()) {
                b.animated_show();
            }
        } else {
            for b in &mut self.buttons {
                b.animated_show();
            }
        }
    }

    /// Hides the group whose hit region contains `p`, checking top,
    /// bottom, right, left and inside in that order. Returns the side
    /// that was hidden.
    pub fn hide_group_under_point(&mut self, p: Point) -> Option<Side> {
        let side = Side::ALL
            .into_iter()
            .find(|side| self.groups[side.index()].region.contains(p))?;
        self.partially_hidden = true;
        for &i in &self.groups[side.index()].members {
            self.buttons[i].hide();
        }
        Some(side)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.groups.iter().any(|g| g.region.contains(p))
    }

    pub fn all_visible(&self) -> bool {
        self.buttons.iter().all(|b| b.is_visible())
    }
}
