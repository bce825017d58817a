//! Pure button placement math — functional core.
//!
//! This module has no knowledge of the buttons themselves. It takes the
//! selection, the screen limits, a button count and a button size, and
//! returns where every button goes and which side it belongs to.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Spacing between buttons, and between buttons and the selection.
pub const SEPARATION: i32 = 6;

/// Side of the selection a button is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    Right,
    Left,
    Inside,
}

impl Side {
    /// Hit-test priority order.
    pub const ALL: [Side; 5] = [Side::Top, Side::Bottom, Side::Right, Side::Left, Side::Inside];

    pub const fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Right => 2,
            Side::Left => 3,
            Side::Inside => 4,
        }
    }
}

/// Sides of the base area with no room left for a row of buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockedSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl BlockedSides {
    /// A side is blocked when the gap to the limit is smaller than one
    /// button plus a separation on each side of it.
    pub fn detect(area: &Rect, limits: &Rect, button_size: i32) -> Self {
        let needed = SEPARATION * 2 + button_size;
        Self {
            top: area.top() - limits.top() < needed,
            bottom: limits.bottom() - area.bottom() < needed,
            left: area.left() - limits.left() < needed,
            right: limits.right() - area.right() < needed,
        }
    }

    pub fn all(&self) -> bool {
        self.top && self.bottom && self.left && self.right
    }

    /// Both left and right are blocked.
    pub fn horizontal(&self) -> bool {
        self.left && self.right
    }

    /// Exactly one of left and right is blocked.
    pub fn one_horizontal(&self) -> bool {
        self.left != self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// `Forward` runs left to right (or top to bottom), `Reverse` the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Forward,
    Reverse,
}

/// Positions of one row or column of buttons, all on the same side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideRun {
    pub side: Side,
    pub positions: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Runs in placement order; positions map onto buttons in collection order.
    pub runs: Vec<SideRun>,
    /// The selection after growing it to hold at least one button per side.
    pub base_area: Rect,
    pub overflowed_inside: bool,
}

impl LayoutPlan {
    pub fn placed(&self) -> usize {
        self.runs.iter().map(|r| r.positions.len()).sum()
    }

    fn push(&mut self, side: Side, positions: Vec<Point>) -> usize {
        let n = positions.len();
        if n > 0 {
            self.runs.push(SideRun { side, positions });
        }
        n
    }
}

/// Widens (or heightens) a selection smaller than one button to exactly
/// one button, growing away from a blocked side.
pub fn grow_to_minimum(selection: Rect, blocked: BlockedSides, button_size: i32) -> Rect {
    let mut area = selection;
    if area.width < button_size {
        let missing = button_size - area.width;
        match (blocked.left, blocked.right) {
            (false, true) => area.x -= missing,
            (true, false) => {}
            _ => area.x -= missing / 2,
        }
        area.width = button_size;
    }
    if area.height < button_size {
        let missing = button_size - area.height;
        match (blocked.top, blocked.bottom) {
            (false, true) => area.y -= missing,
            (true, false) => {}
            _ => area.y -= missing / 2,
        }
        area.height = button_size;
    }
    area
}

/// Grows the base area by one pitch per axis before the next round.
/// With one side of an axis blocked, the growth goes to the open side.
pub fn grow_for_next_round(area: &mut Rect, blocked: BlockedSides, pitch: i32) {
    match (blocked.left, blocked.right) {
        (false, true) => area.set_left(area.left() - pitch),
        (false, false) => {
            area.set_left(area.left() - pitch);
            area.width += pitch;
        }
        _ => area.width += pitch,
    }
    match (blocked.top, blocked.bottom) {
        (false, true) => area.set_top(area.top() - pitch),
        (false, false) => {
            area.set_top(area.top() - pitch);
            area.height += pitch;
        }
        _ => area.height += pitch,
    }
}

/// How many whole buttons fit along an edge of `length`.
pub fn per_line(length: i32, button_size: i32) -> usize {
    ((length + SEPARATION) / (button_size + SEPARATION)).max(0) as usize
}

/// How many buttons fit in one row inside an area of `width`. Never zero,
/// so an undersized area still gets one column.
pub fn inside_per_row(width: i32, button_size: i32) -> usize {
    ((width - SEPARATION) / (button_size + SEPARATION)).max(1) as usize
}

/// Buttons left over once every side is filled edge to edge, at most 4.
/// Negative when the sides have room to spare.
pub fn corner_items(total: usize, per_row: usize, per_col: usize) -> i32 {
    (total as i32 - 2 * per_row as i32 - 2 * per_col as i32).min(4)
}

/// Extra buttons the bottom row takes on from the corners.
pub fn bottom_corner_extra(corners: i32, blocked: BlockedSides) -> usize {
    if corners <= 2 {
        return 0;
    }
    let mut extra = corners - 2;
    if blocked.one_horizontal() && extra > 1 {
        extra -= 1;
    }
    extra as usize
}

/// Extra buttons the top row takes on from the corners.
pub fn top_corner_extra(corners: i32, blocked: BlockedSides) -> usize {
    let none_horizontal = !blocked.left && !blocked.right;
    if corners > 1 && none_horizontal {
        2
    } else if (corners == 1 && !blocked.horizontal()) || (corners > 1 && blocked.one_horizontal()) {
        1
    } else {
        0
    }
}

/// Offset from the center to the first button of a centered run of `count`.
fn centering_shift(count: i32, button_size: i32) -> i32 {
    let pitch = button_size + SEPARATION;
    if count % 2 == 0 {
        pitch * (count / 2) - SEPARATION / 2
    } else {
        pitch * ((count - 1) / 2) + button_size / 2
    }
}

/// Top-left corners of `count` buttons centered on `center` along `axis`.
///
/// `center` is only centered along `axis`; the other coordinate is used
/// as-is for every button.
pub fn line_points(center: Point, count: usize, button_size: i32, axis: Axis, flow: Flow) -> Vec<Point> {
    let pitch = button_size + SEPARATION;
    let mut shift = centering_shift(count as i32, button_size);
    let (start, step) = match flow {
        Flow::Forward => (-shift, pitch),
        Flow::Reverse => {
            shift -= button_size;
            (shift, -pitch)
        }
    };
    (0..count as i32)
        .map(|i| {
            let d = start + i * step;
            match axis {
                Axis::Horizontal => center.offset(d, 0),
                Axis::Vertical => center.offset(0, d),
            }
        })
        .collect()
}

/// Rows of buttons inside `area`, filled left to right from the bottom up.
pub fn inside_rows(area: &Rect, count: usize, button_size: i32) -> Vec<Vec<Point>> {
    let pitch = button_size + SEPARATION;
    let per_row = inside_per_row(area.width, button_size);
    let left = area.left() + SEPARATION;
    let bottom = area.bottom() - SEPARATION - button_size;
    let points: Vec<Point> = (0..count)
        .map(|i| {
            let row = (i / per_row) as i32;
            let col = (i % per_row) as i32;
            Point::new(left + col * pitch, bottom - row * pitch)
        })
        .collect();
    points.chunks(per_row).map(|row| row.to_vec()).collect()
}

/// Hit rectangle for a run: the buttons' bounding box plus one separation.
pub fn run_hit_rect(positions: &[Point], button_size: i32) -> Option<Rect> {
    let (first, rest) = positions.split_first()?;
    let bounds = rest.iter().fold(Rect::square(*first, button_size), |acc, p| {
        acc.united(&Rect::square(*p, button_size))
    });
    Some(bounds.expanded(SEPARATION))
}

/// True when `limits` can hold one button with a separation on each side.
pub fn fits_one_button(limits: &Rect, button_size: i32) -> bool {
    let needed = button_size + SEPARATION * 2;
    limits.width >= needed && limits.height >= needed
}

/// Pulls a button position back so the button lies inside `limits`.
/// When the limits are smaller than a button, the button is pinned to
/// the top-left corner of the limits.
pub fn clamp_into(pos: Point, limits: &Rect, button_size: i32) -> Point {
    let max_x = (limits.right() - button_size).max(limits.left());
    let max_y = (limits.bottom() - button_size).max(limits.top());
    Point::new(pos.x.clamp(limits.left(), max_x), pos.y.clamp(limits.top(), max_y))
}

fn nudge_away_from_blocked(center: Point, blocked: BlockedSides, pitch: i32) -> Point {
    if blocked.left {
        center.offset(pitch / 2, 0)
    } else if blocked.right {
        center.offset(-pitch / 2, 0)
    } else {
        center
    }
}

/// Computes the position and side of `total` buttons around `selection`.
///
/// Sides are filled bottom, right, top, left. While buttons remain, the
/// base area grows by one pitch and the sides are filled again. When all
/// four sides are blocked, the remaining buttons go inside the base area.
pub fn plan_layout(selection: Rect, limits: Rect, total: usize, button_size: i32) -> LayoutPlan {
    let mut plan = LayoutPlan::default();
    if total == 0 {
        plan.base_area = selection;
        return plan;
    }

    let size = button_size.max(1);
    let pitch = size + SEPARATION;
    if !fits_one_button(&limits, size) {
        log::warn!(
            "[BUTTONS] Limits {}x{} cannot hold a {}px button; positions will be clamped",
            limits.width,
            limits.height,
            size
        );
    }

    let blocked = BlockedSides::detect(&selection, &limits, size);
    let mut area = grow_to_minimum(selection, blocked, size);
    plan.base_area = area;

    let clamp = |points: Vec<Point>| -> Vec<Point> {
        points.into_iter().map(|p| clamp_into(p, &limits, size)).collect()
    };

    let mut placed = 0usize;
    while placed < total {
        let blocked = BlockedSides::detect(&area, &limits, size);

        if blocked.all() {
            for row in inside_rows(&area, total - placed, size) {
                placed += plan.push(Side::Inside, clamp(row));
            }
            plan.overflowed_inside = true;
            break;
        }

        let per_row = per_line(area.width, size);
        let per_col = per_line(area.height, size);
        let corners = corner_items(total, per_row, per_col);
        let center = area.center();

        if !blocked.bottom {
            let remaining = total - placed;
            let count = (remaining.min(per_row) + bottom_corner_extra(corners, blocked)).min(remaining);
            let mut anchor = Point::new(center.x, area.bottom() + SEPARATION);
            if count > per_row {
                anchor = nudge_away_from_blocked(anchor, blocked, pitch);
            }
            let points = line_points(anchor, count, size, Axis::Horizontal, Flow::Forward);
            placed += plan.push(Side::Bottom, clamp(points));
        }

        if !blocked.right && placed < total {
            let count = (total - placed).min(per_col);
            let anchor = Point::new(area.right() + SEPARATION, center.y);
            let points = line_points(anchor, count, size, Axis::Vertical, Flow::Reverse);
            placed += plan.push(Side::Right, clamp(points));
        }

        if !blocked.top && placed < total {
            let remaining = total - placed;
            let count = (remaining.min(per_row) + top_corner_extra(corners, blocked)).min(remaining);
            let mut anchor = Point::new(center.x, area.top() - pitch);
            if count == per_row + 1 {
                anchor = nudge_away_from_blocked(anchor, blocked, pitch);
            }
            let points = line_points(anchor, count, size, Axis::Horizontal, Flow::Reverse);
            placed += plan.push(Side::Top, clamp(points));
        }

        if !blocked.left && placed < total {
            let count = (total - placed).min(per_col);
            let anchor = Point::new(area.left() - pitch, center.y);
            let points = line_points(anchor, count, size, Axis::Vertical, Flow::Forward);
            placed += plan.push(Side::Left, clamp(points));
        }

        if placed < total {
            grow_for_next_round(&mut area, blocked, pitch);
        }
    }

    plan
}
