use crate::audio::{self, BgmPlayer};
use crate::core::AnxiousButton;
use crate::dom;
use crate::frame::Clock;
use crate::input;
use crate::render::Stage;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub app: Rc<RefCell<AnxiousButton<StdRng>>>,
    pub stage: Rc<Stage>,
    pub clock: Clock,
    pub zone: web::Element,
    pub player: Rc<RefCell<BgmPlayer>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousemove(&w);
    wire_evasive_click(&w);
    wire_yes_click(&w);
    wire_audio_pointerdown(&w);
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_listener(&document, "mousemove", move |ev: web::MouseEvent| {
        if w.app.borrow().has_been_clicked() {
            return;
        }
        let layout = input::read_layout(&w.stage.button, &w.zone);
        let cursor = input::client_point(&ev);
        let effects = w.app.borrow_mut().pointer_moved(w.clock.now(), cursor, layout);
        w.stage.apply_all(&effects);
    });
}

fn wire_evasive_click(w: &PointerWiring) {
    let w = w.clone();
    let button = w.stage.button.clone();
    dom::add_listener(&button, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let layout = input::read_layout(&w.stage.button, &w.zone);
        let effects = w.app.borrow_mut().click_evasive(w.clock.now(), layout);
        w.stage.apply_all(&effects);
    });
}

fn wire_yes_click(w: &PointerWiring) {
    let w = w.clone();
    let yes_button = w.stage.yes_button.clone();
    dom::add_listener(&yes_button, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let layout = input::read_layout(&w.stage.button, &w.zone);
        let effects = w.app.borrow_mut().click_yes(w.clock.now(), layout);
        w.stage.apply_all(&effects);
    });
}

// Browsers only allow audio after a gesture; the first pointer-down anywhere counts.
fn wire_audio_pointerdown(w: &PointerWiring) {
    let player = w.player.clone();
    dom::add_listener_once(&w.document, "pointerdown", move |_ev: web::PointerEvent| {
        log::info!("[audio] pointer gesture");
        spawn_local(audio::ensure_started(player.clone()));
    });
}
