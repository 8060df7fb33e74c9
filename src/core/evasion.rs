use super::geometry::Rect;
use glam::Vec2;
use std::time::Duration;

// Evasion only triggers inside this radius, and only while panicking.
pub const EVADE_TRIGGER_DISTANCE: f32 = 80.0;
// How far the button jumps along the escape direction.
pub const EVADE_MOVE_DISTANCE: f32 = 150.0;
// Minimum gap kept between the button and the zone edges.
pub const ZONE_MARGIN: f32 = 50.0;
// Matches the CSS `left/top` transition on `.running`.
pub const EVADE_LOCK: Duration = Duration::from_millis(200);

/// Closed interval the button's zone-relative offset may occupy on one axis.
/// `None` when the zone is too small for the button plus both margins.
#[inline]
pub fn allowed_range(zone_extent: f32, button_extent: f32) -> Option<(f32, f32)> {
    let lo = ZONE_MARGIN;
    let hi = zone_extent - button_extent - ZONE_MARGIN;
    (hi >= lo).then_some((lo, hi))
}

/// Compute the new zone-relative `(left, top)` for the button, moving it
/// directly away from `cursor`.
///
/// Returns `None` when either axis has no valid placement; the caller then
/// leaves the button where it is.
pub fn plan_escape(cursor: Vec2, button: Rect, zone: Rect) -> Option<Vec2> {
    let (x_lo, x_hi) = allowed_range(zone.width, button.width)?;
    let (y_lo, y_hi) = allowed_range(zone.height, button.height)?;

    let center = button.center();
    let away = center - cursor;
    let angle = away.y.atan2(away.x);
    let step = Vec2::new(angle.cos(), angle.sin()) * EVADE_MOVE_DISTANCE;

    let target = center - zone.origin() + step - button.size() / 2.0;
    Some(Vec2::new(
        target.x.clamp(x_lo, x_hi),
        target.y.clamp(y_lo, y_hi),
    ))
}
