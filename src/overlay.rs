use crate::constants::CRASH_BACKGROUND;
use web_sys as web;

/// Full-screen fake crash shown after the evasive button is caught.
#[derive(Clone)]
pub struct CrashOverlay {
    pub overlay: web::Element,
    pub container: web::HtmlElement,
    pub body: web::HtmlElement,
}

impl CrashOverlay {
    pub fn show(&self) {
        _ = self.overlay.class_list().add_1("active");
        // hide the page behind it to sell the effect
        _ = self.container.style().set_property("opacity", "0");
        _ = self.body.style().set_property("background", CRASH_BACKGROUND);
    }
}

/// Dip-to-white, then fade in the image.
#[derive(Clone)]
pub struct RevealOverlay {
    pub root: web::Element,
    pub flash: web::Element,
    pub image: web::Element,
}

impl RevealOverlay {
    pub fn start(&self) {
        _ = self.root.class_list().add_1("active");
        _ = self.root.set_attribute("aria-hidden", "false");
        _ = self.flash.class_list().add_1("on");
        _ = self.image.class_list().remove_1("show");
    }

    pub fn show_image(&self) {
        _ = self.flash.class_list().remove_1("on");
        _ = self.image.class_list().add_1("show");
    }
}
