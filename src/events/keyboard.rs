use crate::audio::{self, BgmPlayer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A key press also counts as the gesture that unlocks audio.
pub fn wire_audio_keydown(document: &web::Document, player: Rc<RefCell<BgmPlayer>>) {
    crate::dom::add_listener_once(document, "keydown", move |_ev: web::KeyboardEvent| {
        log::info!("[audio] keyboard gesture");
        spawn_local(audio::ensure_started(player.clone()));
    });
}
