use crate::core::{Layout, Rect};
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn rect_from_dom(rect: &web::DomRect) -> Rect {
    Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Fresh layout snapshot; evasion moves the button, so never cache this.
#[inline]
pub fn read_layout(button: &web::Element, zone: &web::Element) -> Layout {
    Layout {
        button: rect_from_dom(&button.get_bounding_client_rect()),
        zone: rect_from_dom(&zone.get_bounding_client_rect()),
    }
}
